use anyhow::anyhow;
pub use anyhow::Result;
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// Views the host application can display.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum View {
    Home,
    EditScript,
}

/// The navigation table: path patterns bound to views, in match order.
///
/// A `:name` segment captures a single path segment as a route parameter.
pub static ROUTES: &[(&str, View)] = &[("/", View::Home), ("/edit/:id", View::EditScript)];

/// A concrete path resolved against [`ROUTES`].
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Route {
    Home,
    EditScript { id: String },
}

impl Route {
    pub fn view(&self) -> View {
        match self {
            Route::Home => View::Home,
            Route::EditScript { .. } => View::EditScript,
        }
    }
}

fn compile_pattern(pattern: &str) -> Regex {
    let mut re = String::from("^");
    for segment in pattern.split('/').skip(1) {
        re.push('/');
        if let Some(name) = segment.strip_prefix(':') {
            re.push_str(&format!("(?P<{}>[^/]+)", name));
        } else {
            re.push_str(&regex::escape(segment));
        }
    }
    re.push('$');
    Regex::new(&re).expect("static route pattern compiles")
}

impl FromStr for Route {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref COMPILED: Vec<(Regex, View)> = ROUTES
                .iter()
                .map(|(pattern, view)| (compile_pattern(pattern), *view))
                .collect();
        }
        for (re, view) in COMPILED.iter() {
            if let Some(caps) = re.captures(s) {
                return Ok(match view {
                    View::Home => Route::Home,
                    View::EditScript => Route::EditScript {
                        id: caps
                            .name("id")
                            .ok_or(anyhow!("route pattern missing :id parameter"))?
                            .as_str()
                            .to_string(),
                    },
                });
            }
        }
        Err(anyhow!("no route bound for path: {}", s))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => write!(f, "/"),
            Route::EditScript { id } => write!(f, "/edit/{}", id),
        }
    }
}

#[test]
fn test_route_resolution() {
    assert_eq!(Route::from_str("/").unwrap(), Route::Home);
    assert_eq!(Route::from_str("/").unwrap().view(), View::Home);

    let route = Route::from_str("/edit/123").unwrap();
    assert_eq!(
        route,
        Route::EditScript {
            id: "123".to_string()
        }
    );
    assert_eq!(route.view(), View::EditScript);

    assert!(Route::from_str("").is_err());
    assert!(Route::from_str("/edit").is_err());
    assert!(Route::from_str("/edit/").is_err());
    assert!(Route::from_str("/edit/1/2").is_err());
    assert!(Route::from_str("/nope").is_err());
}

#[test]
fn test_route_display() {
    assert_eq!(Route::Home.to_string(), "/");
    assert_eq!(
        Route::EditScript {
            id: "abc".to_string()
        }
        .to_string(),
        "/edit/abc"
    );

    // paths round-trip through the table
    for path in ["/", "/edit/xyz-9"] {
        assert_eq!(Route::from_str(path).unwrap().to_string(), path);
    }
}
