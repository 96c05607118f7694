//! Worksheet-level operations over an opened spreadsheet.
//!
//! Every operation resolves its worksheet lazily on the call: one creation
//! attempt with the default grid, falling back to a lookup by title on the
//! duplicate-title conflict. Nothing is cached between calls beyond the
//! authenticated handle itself.

use indexmap::IndexMap;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::Spreadsheet;
use crate::column;
use crate::errors::{Result, SheetsError};
use crate::frame::{self, DataFrame};
use crate::req::HttpTransport;

/// Grid dimensions for a newly created worksheet.
pub const NEW_WORKSHEET_ROWS: i64 = 100;
pub const NEW_WORKSHEET_COLS: i64 = 20;

/// How the remote service interprets submitted cell values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueInputOption {
    /// Values are stored as-is.
    Raw,
    /// Values are parsed as if the user typed them: numbers, dates, formulas.
    UserEntered,
}

impl ValueInputOption {
    fn as_str(self) -> &'static str {
        match self {
            ValueInputOption::Raw => "RAW",
            ValueInputOption::UserEntered => "USER_ENTERED",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorksheetProperties {
    #[serde(default)]
    pub sheet_id: i64,
    pub title: String,
    #[serde(default)]
    pub index: i64,
    #[serde(default)]
    pub grid_properties: GridProperties,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridProperties {
    #[serde(default)]
    pub row_count: i64,
    #[serde(default)]
    pub column_count: i64,
}

#[derive(Debug, Deserialize)]
struct SpreadsheetMeta {
    #[serde(default)]
    sheets: Vec<SheetMeta>,
}

#[derive(Debug, Deserialize)]
struct SheetMeta {
    properties: WorksheetProperties,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub major_dimension: Option<String>,
    #[serde(default)]
    pub values: Vec<Vec<Value>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateValuesResponse {
    pub spreadsheet_id: String,
    #[serde(default)]
    pub updated_range: Option<String>,
    #[serde(default)]
    pub updated_rows: i64,
    #[serde(default)]
    pub updated_columns: i64,
    #[serde(default)]
    pub updated_cells: i64,
}

/// Raw response of the `values:append` call.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppendValuesResponse {
    pub spreadsheet_id: String,
    #[serde(default)]
    pub table_range: Option<String>,
    #[serde(default)]
    pub updates: Option<UpdateValuesResponse>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BatchUpdateRequest {
    requests: Vec<AddSheetRequest>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AddSheetRequest {
    add_sheet: AddSheet,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AddSheet {
    properties: NewSheetProperties,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NewSheetProperties {
    title: String,
    grid_properties: GridProperties,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BatchUpdateReply {
    #[serde(default)]
    replies: Vec<AddSheetReply>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddSheetReply {
    add_sheet: Option<AddedSheet>,
}

#[derive(Debug, Deserialize)]
struct AddedSheet {
    properties: WorksheetProperties,
}

impl<C: HttpTransport> Spreadsheet<C> {
    /// Worksheet titles in spreadsheet order.
    pub fn get_worksheet_names(&self) -> Result<Vec<String>> {
        Ok(self.worksheets()?.into_iter().map(|ws| ws.title).collect())
    }

    /// Properties of every worksheet, in spreadsheet order.
    pub fn worksheets(&self) -> Result<Vec<WorksheetProperties>> {
        Ok(self
            .fetch_meta()?
            .sheets
            .into_iter()
            .map(|sheet| sheet.properties)
            .collect())
    }

    /// All cell values of the worksheet as a raw grid, no header
    /// interpretation.
    pub fn get(&self, worksheet_name: &str) -> Result<Vec<Vec<Value>>> {
        let worksheet = self.resolve_or_create_worksheet(worksheet_name)?;
        self.get_values(&worksheet.title)
    }

    /// Read the worksheet as a tabular frame.
    ///
    /// Without a range the first row becomes the header and the remaining
    /// rows become records with inferred value types. With a range, the raw
    /// cells are fetched verbatim; `header_row` (0-based) selects the row to
    /// use as column names, discarding it and everything above it. An
    /// omitted or out-of-bounds `header_row` yields a positional frame.
    pub fn as_dataframe(
        &self,
        worksheet_name: &str,
        range_name: Option<&str>,
        header_row: Option<usize>,
    ) -> Result<DataFrame> {
        let worksheet = self.resolve_or_create_worksheet(worksheet_name)?;
        match range_name {
            None => {
                let mut values = self.get_values(&worksheet.title)?;
                if values.is_empty() {
                    return Ok(DataFrame::default());
                }
                let header = values
                    .remove(0)
                    .into_iter()
                    .map(frame::cell_to_string)
                    .collect();
                let rows = values
                    .into_iter()
                    .map(|row| row.into_iter().map(frame::infer_cell).collect())
                    .collect();
                Ok(DataFrame::new(Some(header), rows))
            }
            Some(range) => {
                let values = self.get_values(&format!("{}!{range}", worksheet.title))?;
                Ok(match header_row {
                    Some(header_row) => DataFrame::with_header_row(values, header_row),
                    None => DataFrame::from_rows(values),
                })
            }
        }
    }

    /// Write `cols` into row 1, spanning columns A through the last name.
    /// Columns beyond the span are left untouched.
    pub fn set_cols(&self, worksheet_name: &str, cols: &[String]) -> Result<()> {
        let worksheet = self.resolve_or_create_worksheet(worksheet_name)?;
        let range = column::header_range(cols.len())?;
        let header = vec![cols.iter().map(|c| Value::String(c.clone())).collect()];
        let _ = self.update_values(
            &format!("{}!{range}", worksheet.title),
            header,
            ValueInputOption::Raw,
        )?;
        Ok(())
    }

    /// Append `row` reconciled against the worksheet's header (row 1): the
    /// header dictates order, missing keys become empty strings, keys not in
    /// the header are dropped. The header is re-read on every call so the
    /// append always reflects the latest header.
    pub fn append(
        &self,
        worksheet_name: &str,
        row: &IndexMap<String, Value>,
    ) -> Result<AppendValuesResponse> {
        let worksheet = self.resolve_or_create_worksheet(worksheet_name)?;
        let header = self.header_row(&worksheet.title)?;
        let row_to_append = reconcile_row(&header, row);
        debug!(row = %serde_json::Value::Array(row_to_append.clone()), "appending row");
        self.append_values(
            &worksheet.title,
            vec![row_to_append],
            ValueInputOption::UserEntered,
        )
    }

    /// Write the frame's header and rows starting at A1, overwriting only
    /// the affected range.
    pub fn to_sheet(&self, worksheet_name: &str, df: &DataFrame) -> Result<()> {
        let worksheet = self.resolve_or_create_worksheet(worksheet_name)?;
        let values = df.to_values();
        if values.is_empty() {
            return Ok(());
        }
        let _ = self.update_values(
            &format!("{}!A1", worksheet.title),
            values,
            ValueInputOption::Raw,
        )?;
        Ok(())
    }

    /// Create the worksheet with the default grid; on the duplicate-title
    /// conflict, fall back to looking it up by name. Create-then-fallback
    /// saves a lookup round trip on the first write, at the cost of one
    /// failed call when the worksheet already exists. This is a two-step
    /// protocol, not a transaction: the fallback only fires on the specific
    /// conflict response.
    pub(crate) fn resolve_or_create_worksheet(&self, name: &str) -> Result<WorksheetProperties> {
        match self.add_worksheet(name, NEW_WORKSHEET_ROWS, NEW_WORKSHEET_COLS) {
            Ok(properties) => Ok(properties),
            Err(err) if err.is_already_exists() => self.lookup_worksheet(name),
            Err(err) => Err(err),
        }
    }

    fn lookup_worksheet(&self, name: &str) -> Result<WorksheetProperties> {
        self.worksheets()?
            .into_iter()
            .find(|ws| ws.title == name)
            .ok_or_else(|| SheetsError::WorksheetNotFound(name.to_string()))
    }

    fn add_worksheet(&self, title: &str, rows: i64, cols: i64) -> Result<WorksheetProperties> {
        let body = BatchUpdateRequest {
            requests: vec![AddSheetRequest {
                add_sheet: AddSheet {
                    properties: NewSheetProperties {
                        title: title.to_string(),
                        grid_properties: GridProperties {
                            row_count: rows,
                            column_count: cols,
                        },
                    },
                },
            }],
        };

        let url = self.client.endpoint(&[
            "spreadsheets",
            &format!("{}:batchUpdate", self.spreadsheet_id),
        ])?;
        let reply: BatchUpdateReply = self.client.execute(
            Method::POST,
            url,
            Vec::new(),
            Some(serde_json::to_value(&body)?),
            Some(&self.bearer()?),
        )?;

        reply
            .replies
            .into_iter()
            .find_map(|r| r.add_sheet)
            .map(|added| added.properties)
            .ok_or_else(|| {
                SheetsError::InvalidParameters(
                    "addSheet reply missing sheet properties".to_string(),
                )
            })
    }

    fn fetch_meta(&self) -> Result<SpreadsheetMeta> {
        let url = self
            .client
            .endpoint(&["spreadsheets", &self.spreadsheet_id])?;
        let query = vec![("fields".to_string(), "sheets.properties".to_string())];
        self.client
            .execute(Method::GET, url, query, None, Some(&self.bearer()?))
    }

    fn header_row(&self, title: &str) -> Result<Vec<String>> {
        let values = self.get_values(&format!("{title}!1:1"))?;
        Ok(values
            .into_iter()
            .next()
            .unwrap_or_default()
            .into_iter()
            .map(frame::cell_to_string)
            .collect())
    }

    fn get_values(&self, range: &str) -> Result<Vec<Vec<Value>>> {
        let url = self
            .client
            .endpoint(&["spreadsheets", &self.spreadsheet_id, "values", range])?;
        let value_range: ValueRange =
            self.client
                .execute(Method::GET, url, Vec::new(), None, Some(&self.bearer()?))?;
        Ok(value_range.values)
    }

    fn update_values(
        &self,
        range: &str,
        values: Vec<Vec<Value>>,
        input: ValueInputOption,
    ) -> Result<UpdateValuesResponse> {
        let url = self
            .client
            .endpoint(&["spreadsheets", &self.spreadsheet_id, "values", range])?;
        let query = vec![("valueInputOption".to_string(), input.as_str().to_string())];
        let body = ValueRange {
            range: Some(range.to_string()),
            major_dimension: None,
            values,
        };
        self.client.execute(
            Method::PUT,
            url,
            query,
            Some(serde_json::to_value(&body)?),
            Some(&self.bearer()?),
        )
    }

    fn append_values(
        &self,
        title: &str,
        values: Vec<Vec<Value>>,
        input: ValueInputOption,
    ) -> Result<AppendValuesResponse> {
        let url = self.client.endpoint(&[
            "spreadsheets",
            &self.spreadsheet_id,
            "values",
            &format!("{title}:append"),
        ])?;
        let query = vec![("valueInputOption".to_string(), input.as_str().to_string())];
        let body = ValueRange {
            range: None,
            major_dimension: None,
            values,
        };
        self.client.execute(
            Method::POST,
            url,
            query,
            Some(serde_json::to_value(&body)?),
            Some(&self.bearer()?),
        )
    }
}

/// Reconcile an input row against the worksheet header: header order wins,
/// missing keys become empty strings, keys outside the header are dropped.
pub(crate) fn reconcile_row(header: &[String], row: &IndexMap<String, Value>) -> Vec<Value> {
    header
        .iter()
        .map(|key| {
            row.get(key.as_str())
                .cloned()
                .unwrap_or_else(|| Value::String(String::new()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use reqwest::StatusCode;
    use serde_json::json;

    use super::*;
    use crate::req::{ApiRequest, ApiResponse};

    #[derive(Debug, Default)]
    struct ScriptedTransport {
        requests: RefCell<Vec<ApiRequest>>,
        responses: RefCell<VecDeque<ApiResponse>>,
    }

    impl ScriptedTransport {
        fn new(responses: Vec<ApiResponse>) -> Self {
            ScriptedTransport {
                requests: RefCell::new(Vec::new()),
                responses: RefCell::new(responses.into()),
            }
        }
    }

    impl HttpTransport for ScriptedTransport {
        fn execute(&self, request: ApiRequest) -> Result<ApiResponse> {
            self.requests.borrow_mut().push(request);
            self.responses.borrow_mut().pop_front().ok_or_else(|| {
                SheetsError::InvalidParameters("no scripted response left".to_string())
            })
        }
    }

    fn ok(body: Value) -> ApiResponse {
        ApiResponse {
            status: StatusCode::OK,
            body: body.to_string().into_bytes(),
        }
    }

    fn err(status: StatusCode, code: i64, api_status: &str, message: &str) -> ApiResponse {
        ApiResponse {
            status,
            body: json!({"error": {"code": code, "status": api_status, "message": message}})
                .to_string()
                .into_bytes(),
        }
    }

    fn conflict(title: &str) -> ApiResponse {
        err(
            StatusCode::BAD_REQUEST,
            400,
            "INVALID_ARGUMENT",
            &format!(
                "A sheet with the name \"{title}\" already exists. Please enter another name."
            ),
        )
    }

    fn added_sheet(title: &str) -> Value {
        json!({
            "spreadsheetId": "test-spreadsheet",
            "replies": [{
                "addSheet": {
                    "properties": {
                        "sheetId": 7,
                        "title": title,
                        "index": 1,
                        "gridProperties": {"rowCount": 100, "columnCount": 20},
                    }
                }
            }]
        })
    }

    fn meta(titles: &[&str]) -> Value {
        let sheets: Vec<Value> = titles
            .iter()
            .enumerate()
            .map(|(i, title)| {
                json!({"properties": {"sheetId": i, "title": title, "index": i}})
            })
            .collect();
        json!({"sheets": sheets})
    }

    fn update_response(range: &str) -> Value {
        json!({
            "spreadsheetId": "test-spreadsheet",
            "updatedRange": range,
            "updatedRows": 1,
            "updatedColumns": 3,
            "updatedCells": 3,
        })
    }

    fn sheet_with(responses: Vec<ApiResponse>) -> Spreadsheet<ScriptedTransport> {
        Spreadsheet::for_tests(ScriptedTransport::new(responses))
    }

    #[test]
    fn missing_worksheet_is_created_with_one_call() {
        let sheet = sheet_with(vec![ok(added_sheet("Logs"))]);

        let properties = sheet.resolve_or_create_worksheet("Logs").unwrap();
        assert_eq!(properties.title, "Logs");
        assert_eq!(properties.grid_properties.row_count, 100);

        let requests = sheet.client.transport().requests.borrow();
        assert_eq!(requests.len(), 1, "exactly one creation call, no lookups");
        assert!(requests[0].url.path().ends_with(":batchUpdate"));

        let body = requests[0].json_body.as_ref().unwrap();
        let properties = &body["requests"][0]["addSheet"]["properties"];
        assert_eq!(properties["title"], "Logs");
        assert_eq!(properties["gridProperties"]["rowCount"], 100);
        assert_eq!(properties["gridProperties"]["columnCount"], 20);
    }

    #[test]
    fn existing_worksheet_falls_back_to_lookup() {
        let sheet = sheet_with(vec![conflict("Logs"), ok(meta(&["Other", "Logs"]))]);

        let properties = sheet.resolve_or_create_worksheet("Logs").unwrap();
        assert_eq!(properties.title, "Logs");
        assert_eq!(properties.sheet_id, 1);

        let requests = sheet.client.transport().requests.borrow();
        assert_eq!(requests.len(), 2, "one failed create then one lookup");
        assert!(requests[0].url.path().ends_with(":batchUpdate"));
        assert!(requests[1].url.path().ends_with("/spreadsheets/test-spreadsheet"));
        assert_eq!(requests[1].method, Method::GET);
    }

    #[test]
    fn non_conflict_creation_errors_propagate() {
        let sheet = sheet_with(vec![err(
            StatusCode::FORBIDDEN,
            403,
            "PERMISSION_DENIED",
            "The caller does not have permission",
        )]);

        let err = sheet.resolve_or_create_worksheet("Logs").unwrap_err();
        assert!(matches!(
            err,
            SheetsError::ApiError { ref status, .. } if status == "PERMISSION_DENIED"
        ));

        let requests = sheet.client.transport().requests.borrow();
        assert_eq!(requests.len(), 1, "no lookup after a non-conflict failure");
    }

    #[test]
    fn lookup_of_vanished_worksheet_fails() {
        let sheet = sheet_with(vec![conflict("Logs"), ok(meta(&["Other"]))]);

        let err = sheet.resolve_or_create_worksheet("Logs").unwrap_err();
        assert!(matches!(err, SheetsError::WorksheetNotFound(name) if name == "Logs"));
    }

    #[test]
    fn set_cols_writes_the_exact_header_range() {
        let sheet = sheet_with(vec![
            ok(added_sheet("Sheet1")),
            ok(update_response("Sheet1!A1:C1")),
        ]);

        let cols = ["Name", "Age", "City"].map(String::from);
        sheet.set_cols("Sheet1", &cols).unwrap();

        let requests = sheet.client.transport().requests.borrow();
        assert_eq!(requests.len(), 2);

        let update = &requests[1];
        assert_eq!(update.method, Method::PUT);
        assert!(update.url.path().ends_with("/values/Sheet1!A1:C1"));
        assert!(update
            .query
            .contains(&("valueInputOption".to_string(), "RAW".to_string())));

        let body = update.json_body.as_ref().unwrap();
        assert_eq!(body["values"], json!([["Name", "Age", "City"]]));
    }

    #[test]
    fn append_reconciles_against_the_live_header() {
        logutil::init_for_tests();

        let sheet = sheet_with(vec![
            conflict("data"),
            ok(meta(&["data"])),
            ok(json!({"range": "data!A1:C1", "values": [["a", "b", "c"]]})),
            ok(json!({
                "spreadsheetId": "test-spreadsheet",
                "tableRange": "data!A1:C1",
                "updates": update_response("data!A2:C2"),
            })),
        ]);

        let row = IndexMap::from([
            ("b".to_string(), json!(2)),
            ("d".to_string(), json!(9)),
        ]);
        let response = sheet.append("data", &row).unwrap();
        assert_eq!(response.table_range.as_deref(), Some("data!A1:C1"));

        let requests = sheet.client.transport().requests.borrow();
        assert_eq!(requests.len(), 4, "create, lookup, header read, append");

        let header_read = &requests[2];
        assert!(header_read.url.path().ends_with("/values/data!1:1"));

        let append = &requests[3];
        assert!(append.url.path().ends_with("/values/data:append"));
        assert!(append
            .query
            .contains(&("valueInputOption".to_string(), "USER_ENTERED".to_string())));
        assert_eq!(
            append.json_body.as_ref().unwrap()["values"],
            json!([["", 2, ""]])
        );
    }

    #[test]
    fn reconcile_drops_unknown_keys_and_blanks_missing_ones() {
        let header = ["a", "b", "c"].map(String::from);
        let row = IndexMap::from([
            ("b".to_string(), json!(2)),
            ("d".to_string(), json!(9)),
        ]);

        assert_eq!(reconcile_row(&header, &row), vec![json!(""), json!(2), json!("")]);
        assert_eq!(reconcile_row(&[], &row), Vec::<Value>::new());
    }

    #[test]
    fn as_dataframe_with_range_and_header_row() {
        let sheet = sheet_with(vec![
            ok(added_sheet("data")),
            ok(json!({
                "range": "data!A1:B3",
                "values": [["x"], ["h1", "h2"], ["v1", "v2"]],
            })),
        ]);

        let df = sheet.as_dataframe("data", Some("A1:B3"), Some(1)).unwrap();
        assert_eq!(df.columns().unwrap(), ["h1", "h2"]);
        assert_eq!(df.rows(), &[vec![json!("v1"), json!("v2")]]);

        let requests = sheet.client.transport().requests.borrow();
        assert!(requests[1].url.path().ends_with("/values/data!A1:B3"));
    }

    #[test]
    fn as_dataframe_without_range_uses_first_row_as_header() {
        let sheet = sheet_with(vec![
            ok(added_sheet("data")),
            ok(json!({
                "range": "data!A1:B3",
                "values": [["name", "age"], ["alice", "30"], ["bob", ""]],
            })),
        ]);

        let df = sheet.as_dataframe("data", None, None).unwrap();
        assert_eq!(df.columns().unwrap(), ["name", "age"]);
        assert_eq!(
            df.rows(),
            &[
                vec![json!("alice"), json!(30)],
                vec![json!("bob"), json!("")],
            ]
        );
    }

    #[test]
    fn as_dataframe_of_empty_worksheet_is_empty() {
        let sheet = sheet_with(vec![
            ok(added_sheet("data")),
            ok(json!({"range": "data!A1:T100"})),
        ]);

        let df = sheet.as_dataframe("data", None, None).unwrap();
        assert!(df.is_empty());
    }

    #[test]
    fn get_returns_the_raw_grid() {
        let sheet = sheet_with(vec![
            ok(added_sheet("data")),
            ok(json!({
                "range": "data!A1:B2",
                "values": [["h", ""], ["1", "2"]],
            })),
        ]);

        let values = sheet.get("data").unwrap();
        assert_eq!(values, grid(json!([["h", ""], ["1", "2"]])));
    }

    #[test]
    fn to_sheet_writes_header_and_rows_at_origin() {
        let sheet = sheet_with(vec![
            ok(added_sheet("data")),
            ok(update_response("data!A1:B2")),
        ]);

        let df = DataFrame::new(
            Some(vec!["x".to_string(), "y".to_string()]),
            vec![vec![json!(1), Value::Null]],
        );
        sheet.to_sheet("data", &df).unwrap();

        let requests = sheet.client.transport().requests.borrow();
        let update = &requests[1];
        assert!(update.url.path().ends_with("/values/data!A1"));
        assert_eq!(
            update.json_body.as_ref().unwrap()["values"],
            json!([["x", "y"], [1, ""]])
        );
    }

    #[test]
    fn expired_token_is_re_exchanged_before_the_call() {
        use chrono::{Duration, Utc};

        use crate::Token;

        let sheet = Spreadsheet::for_tests_with_token(
            ScriptedTransport::new(vec![
                ok(json!({"access_token": "fresh-token", "expires_in": 3599})),
                ok(meta(&["data"])),
            ]),
            Token::new("stale-token".to_string(), 1, Utc::now() - Duration::seconds(5)),
        );

        let names = sheet.get_worksheet_names().unwrap();
        assert_eq!(names, ["data"]);

        let requests = sheet.client.transport().requests.borrow();
        assert_eq!(requests.len(), 2, "token exchange then the metadata call");

        let exchange = &requests[0];
        assert_eq!(exchange.method, Method::POST);
        assert_eq!(exchange.url.as_str(), "https://oauth2.googleapis.com/token");
        assert!(exchange.bearer.is_none());
        let form = exchange.form_body.as_ref().unwrap();
        assert!(form.contains(&("grant_type".to_string(), "refresh_token".to_string())));
        assert!(form.contains(&("refresh_token".to_string(), "1//refresh".to_string())));

        assert_eq!(requests[1].bearer.as_deref(), Some("fresh-token"));
    }

    #[test]
    fn worksheet_names_come_from_metadata_in_order() {
        let sheet = sheet_with(vec![ok(meta(&["first", "second", "third"]))]);

        let names = sheet.get_worksheet_names().unwrap();
        assert_eq!(names, ["first", "second", "third"]);

        let requests = sheet.client.transport().requests.borrow();
        assert_eq!(requests.len(), 1);
        assert!(requests[0]
            .query
            .contains(&("fields".to_string(), "sheets.properties".to_string())));
    }

    fn grid(values: Value) -> Vec<Vec<Value>> {
        serde_json::from_value(values).unwrap()
    }
}
