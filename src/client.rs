pub use anyhow::Result;
use serde_json::Value;

static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

/// Default base address of the backend API, including the `/api` path prefix.
pub static DEFAULT_API_BASE: &str = "http://localhost:8080/api";

/// Create-vs-update intent when saving a script.
///
/// The backend shares its project-create endpoint between "new project" and
/// "new script" calls; an update targets an existing project by identifier.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ScriptSave {
    Create(Value),
    Update { id: String, record: Value },
}

impl ScriptSave {
    /// Classifies a raw script record by identifier presence.
    ///
    /// An `id` field selects an update only when it is a non-empty string or
    /// a non-zero number; missing, null, empty-string, and zero identifiers
    /// all mean create. The field is forwarded in the record either way.
    pub fn from_record(record: Value) -> Self {
        let id = match &record["id"] {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
            _ => None,
        };
        match id {
            Some(id) => ScriptSave::Update { id, record },
            None => ScriptSave::Create(record),
        }
    }
}

#[test]
fn test_script_save_classification() {
    use serde_json::json;

    assert_eq!(
        ScriptSave::from_record(json!({"id": "42", "content": "fade in"})),
        ScriptSave::Update {
            id: "42".to_string(),
            record: json!({"id": "42", "content": "fade in"}),
        },
    );
    assert_eq!(
        ScriptSave::from_record(json!({"id": 7})),
        ScriptSave::Update {
            id: "7".to_string(),
            record: json!({"id": 7}),
        },
    );

    // missing, null, empty, and zero identifiers are all "create"
    assert_eq!(
        ScriptSave::from_record(json!({"content": "fade in"})),
        ScriptSave::Create(json!({"content": "fade in"})),
    );
    assert_eq!(
        ScriptSave::from_record(json!({"id": null})),
        ScriptSave::Create(json!({"id": null})),
    );
    assert_eq!(
        ScriptSave::from_record(json!({"id": ""})),
        ScriptSave::Create(json!({"id": ""})),
    );
    assert_eq!(
        ScriptSave::from_record(json!({"id": 0})),
        ScriptSave::Create(json!({"id": 0})),
    );

    // non-object records have no identifier to speak of
    assert_eq!(
        ScriptSave::from_record(json!("bare string")),
        ScriptSave::Create(json!("bare string")),
    );
}

/// Thin pass-through client for the video project backend.
///
/// One method per backend operation; each issues a single request against the
/// base address and returns the decoded JSON body verbatim. No retries, no
/// response validation, no error translation: transport failures and non-2xx
/// statuses propagate as-is.
#[derive(Debug, Clone)]
pub struct StudioClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl StudioClient {
    pub fn new(base_url: String) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(APP_USER_AGENT)
            .build()
            .expect("ERROR :: Could not build reqwest client");

        Ok(StudioClient {
            http_client,
            base_url,
        })
    }

    async fn get_json(&self, path: &str) -> Result<Value> {
        log::debug!("API GET path={}", path);
        let res = self
            .http_client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;
        let res = res.error_for_status()?;
        if res.content_length() == Some(0) {
            Ok(Value::Null)
        } else {
            Ok(res.json().await?)
        }
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value> {
        log::debug!("API POST path={} body={:?}", path, body);
        let res = self
            .http_client
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await?;
        let res = res.error_for_status()?;
        if res.content_length() == Some(0) {
            Ok(Value::Null)
        } else {
            Ok(res.json().await?)
        }
    }

    async fn delete_json(&self, path: &str) -> Result<Value> {
        log::debug!("API DELETE path={}", path);
        let res = self
            .http_client
            .delete(format!("{}{}", self.base_url, path))
            .send()
            .await?;
        let res = res.error_for_status()?;
        if res.content_length() == Some(0) {
            Ok(Value::Null)
        } else {
            Ok(res.json().await?)
        }
    }

    /// Creates a new video project from an opaque record.
    pub async fn create_project(&self, project: &Value) -> Result<Value> {
        self.post_json("/projects/create", project).await
    }

    /// Creates a new storyboard shot from an opaque record.
    pub async fn create_shot(&self, shot: &Value) -> Result<Value> {
        self.post_json("/shots", shot).await
    }

    /// Fetches the full project listing.
    pub async fn get_projects(&self) -> Result<Value> {
        self.get_json("/projects").await
    }

    /// Fetches the total project count.
    pub async fn get_project_count(&self) -> Result<Value> {
        self.get_json("/projects/count").await
    }

    /// Searches projects by keyword.
    ///
    /// The keyword lands verbatim in the final path segment; any escaping is
    /// whatever reqwest's URL handling does by default.
    pub async fn search_projects(&self, keyword: &str) -> Result<Value> {
        self.get_json(&format!("/projects/search/{}", keyword)).await
    }

    /// Fetches one page of the project listing.
    pub async fn get_projects_by_page(&self, page: u32, size: u32) -> Result<Value> {
        self.get_json(&format!("/projectsByPage/{}/{}", page, size))
            .await
    }

    /// Fetches a single project by identifier.
    pub async fn get_project(&self, project_id: &str) -> Result<Value> {
        self.get_json(&format!("/projects/{}", project_id)).await
    }

    /// Saves a script, dispatching on the caller's create-vs-update intent.
    ///
    /// Creates go to the shared project-create endpoint; intentional sharing
    /// with [`StudioClient::create_project`], not duplication.
    pub async fn save_script(&self, save: ScriptSave) -> Result<Value> {
        match save {
            ScriptSave::Update { id, record } => {
                self.post_json(&format!("/projects/update/{}", id), &record)
                    .await
            }
            ScriptSave::Create(record) => self.post_json("/projects/create", &record).await,
        }
    }

    /// Deletes a project by identifier.
    pub async fn delete_project(&self, project_id: &str) -> Result<Value> {
        self.delete_json(&format!("/projects/{}", project_id)).await
    }
}
