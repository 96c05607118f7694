//! Thin blocking connector for the Google Sheets v4 API.
//!
//! [`Spreadsheet`] wraps one authenticated spreadsheet handle and exposes
//! worksheet-level read/write helpers: raw cell grids, tabular frames,
//! header writes and header-matched row appends. Worksheets are resolved
//! lazily on every call and created with a fixed 100×20 grid when missing.
//!
//! ```no_run
//! use sheets_connector::Spreadsheet;
//!
//! # fn main() -> sheets_connector::Result<()> {
//! let sheet = Spreadsheet::builder("1BxiMVs0XRA5nFMdKvBdBZjgmUUqptlbs74OgvE2upms".to_string())
//!     .open()?;
//! let df = sheet.as_dataframe("class_data", None, None)?;
//! println!("{} rows", df.num_rows());
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use parking_lot::Mutex;

use crate::auth::CredentialsKey;
pub use crate::auth::{Token, default_scopes};
pub use crate::column::{header_range, to_sheet_column};
pub use crate::errors::{Result, SheetsError};
pub use crate::frame::DataFrame;
use crate::req::SheetsClient;
pub use crate::req::{ApiRequest, ApiResponse, HttpTransport, ReqwestTransport};
pub use crate::worksheet::{
    AppendValuesResponse,
    GridProperties,
    NEW_WORKSHEET_COLS,
    NEW_WORKSHEET_ROWS,
    UpdateValuesResponse,
    ValueInputOption,
    ValueRange,
    WorksheetProperties,
};

mod auth;
mod req;
mod worksheet;

pub mod column;
pub mod errors;
pub mod frame;

#[derive(Debug)]
pub struct SpreadsheetBuilder {
    spreadsheet_id: String,

    quota_project_id: Option<String>,
    credential_path: Option<PathBuf>,
    scopes: Option<Vec<String>>,
}

macro_rules! builder_fn {
    ($name:ident, $ty:ty) => {
        pub fn $name(mut self, $name: $ty) -> Self {
            self.$name = Some($name);
            self
        }
    };
}

impl SpreadsheetBuilder {
    builder_fn! {quota_project_id, String}

    builder_fn! {credential_path, PathBuf}

    builder_fn! {scopes, Vec<String>}

    pub fn new(spreadsheet_id: String) -> Self {
        Self {
            spreadsheet_id,

            quota_project_id: None,
            credential_path: None,
            scopes: None,
        }
    }

    /// Authenticate and open the spreadsheet by identifier.
    ///
    /// An explicit credential path is read as a key file; otherwise ambient
    /// default credentials are used. Fails if the credentials are invalid or
    /// the identifier cannot be resolved.
    pub fn open(self) -> Result<Spreadsheet> {
        if self.spreadsheet_id.is_empty() {
            return Err(SheetsError::InvalidParameters(
                "spreadsheet id cannot be empty".to_string(),
            ));
        }

        let credentials = match &self.credential_path {
            Some(path) => CredentialsKey::from_file(path)?,
            None => CredentialsKey::ambient()?,
        };
        let scopes = self.scopes.unwrap_or_else(default_scopes);

        let transport = ReqwestTransport::new(self.quota_project_id.as_deref())?;
        let client = SheetsClient::new(transport)?;
        let token = credentials.fetch_token(&client, &scopes)?;

        let spreadsheet = Spreadsheet {
            client,
            credentials,
            scopes,
            token: Mutex::new(token),
            spreadsheet_id: self.spreadsheet_id,
        };

        // Resolving metadata here surfaces a bad identifier at construction
        // time instead of on the first worksheet call.
        let _ = spreadsheet.worksheets()?;
        Ok(spreadsheet)
    }
}

/// One authenticated spreadsheet handle.
///
/// Holds the opened client and token; worksheet operations are defined as
/// inherent methods and each performs its own round trips. Not guaranteed
/// safe for concurrent use from multiple threads.
#[derive(Debug)]
pub struct Spreadsheet<C: HttpTransport = ReqwestTransport> {
    pub(crate) client: SheetsClient<C>,
    pub(crate) credentials: CredentialsKey,
    pub(crate) scopes: Vec<String>,
    pub(crate) token: Mutex<Token>,
    pub(crate) spreadsheet_id: String,
}

impl Spreadsheet {
    pub fn builder(spreadsheet_id: String) -> SpreadsheetBuilder {
        SpreadsheetBuilder::new(spreadsheet_id)
    }
}

impl<C: HttpTransport> Spreadsheet<C> {
    pub fn spreadsheet_id(&self) -> &str {
        &self.spreadsheet_id
    }

    /// Bearer token for the next call, re-exchanging the credentials when
    /// the held token has expired.
    pub(crate) fn bearer(&self) -> Result<String> {
        let mut token = self.token.lock();
        if !token.is_valid() {
            *token = self.credentials.fetch_token(&self.client, &self.scopes)?;
        }
        Ok(token.value().to_string())
    }

    #[cfg(test)]
    pub(crate) fn for_tests(transport: C) -> Self {
        use chrono::Utc;

        Self::for_tests_with_token(
            transport,
            Token::new("test-token".to_string(), 3600, Utc::now()),
        )
    }

    #[cfg(test)]
    pub(crate) fn for_tests_with_token(transport: C, token: Token) -> Self {
        use crate::auth::AuthorizedUserKey;

        Spreadsheet {
            client: SheetsClient::new(transport).expect("base url parses"),
            credentials: CredentialsKey::AuthorizedUser(AuthorizedUserKey {
                client_id: "test-client.apps.googleusercontent.com".to_string(),
                client_secret: "secret".to_string(),
                refresh_token: "1//refresh".to_string(),
            }),
            scopes: default_scopes(),
            token: Mutex::new(token),
            spreadsheet_id: "test-spreadsheet".to_string(),
        }
    }
}
