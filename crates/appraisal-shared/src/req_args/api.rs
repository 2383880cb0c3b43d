use std::fmt::Debug;

/// Paging arguments understood by every list endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct PageArgs {
    pub page: u32,
    pub size: u32,
}

impl Default for PageArgs {
    fn default() -> Self {
        Self { page: 0, size: 20 }
    }
}

/// Filters for the current user's own evaluation requests
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MyEvaluationRequestsFilter {
    #[serde(flatten)]
    pub paging: PageArgs,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
}

/// Filters for the company wide list of evaluation requests
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct EvaluationRequestsFilter {
    #[serde(flatten)]
    pub paging: PageArgs,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct ExportFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActiveFilter {
    #[default]
    All,
    Active,
    Inactive,
}

/// Filters for the user management list as entered on screen. `"ALL"` as a
/// role means no role filter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserListFilter {
    pub paging: PageArgs,
    pub search: Option<String>,
    pub role: Option<String>,
    pub active: ActiveFilter,
}

/// Query actually sent for a [`UserListFilter`]
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct UserListQuery {
    #[serde(flatten)]
    pub paging: PageArgs,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl From<&UserListFilter> for UserListQuery {
    fn from(value: &UserListFilter) -> Self {
        Self {
            paging: value.paging,
            search: value
                .search
                .as_ref()
                .filter(|x| !x.trim().is_empty())
                .cloned(),
            role: value.role.as_ref().filter(|x| *x != "ALL").cloned(),
            active: match value.active {
                ActiveFilter::All => None,
                ActiveFilter::Active => Some(true),
                ActiveFilter::Inactive => Some(false),
            },
        }
    }
}

/// Submission of the public "write to us" form
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct ContactReqArgs {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<String>,
    pub message: String,
}

impl ContactReqArgs {
    /// Blank optional fields are sent as `null`
    pub fn normalized(mut self) -> Self {
        self.phone = self.phone.filter(|x| !x.is_empty());
        self.subject = self.subject.filter(|x| !x.is_empty());
        self
    }
}

/// A file to send as one part of a multipart request
#[derive(Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub mime_type: Option<String>,
}

impl FileUpload {
    pub fn new<S: Into<String>>(file_name: S, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
            mime_type: None,
        }
    }

    pub fn mime_type<S: Into<String>>(mut self, mime_type: S) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }
}

impl Debug for FileUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileUpload")
            .field("file_name", &self.file_name)
            .field("len", &self.bytes.len())
            .field("mime_type", &self.mime_type)
            .finish()
    }
}

/// Documents that can accompany a new evaluation request
#[derive(Debug, Clone, Default)]
pub struct EvaluationRequestDocuments {
    pub cadastral: Option<FileUpload>,
    pub tech_passport: Option<FileUpload>,
    pub fixed_assets: Option<FileUpload>,
}
