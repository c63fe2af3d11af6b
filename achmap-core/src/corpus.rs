//! Reference corpus loading
//!
//! The achievement sheet is kept as three index-aligned sequences so the
//! matcher can rank names or descriptions as plain string slices and map the
//! winning position back to an id.

use tracing::{debug, info};

use crate::constants::{DESCRIPTION_COL, ID_COL, NAME_COL, USER_AGENT};
use crate::error::{AchMapError, Result};

/// One achievement row from the reference dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusEntry {
    pub id: i64,
    pub name: String,
    pub description: String,
}

impl CorpusEntry {
    pub fn new(id: i64, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
        }
    }

    /// Build an entry from a raw CSV record.
    ///
    /// Rows with an empty or missing id or description column are skipped.
    /// An id that does not parse as an integer becomes 0 and the row is kept.
    pub fn from_record(record: &csv::StringRecord) -> Option<Self> {
        let raw_id = record.get(ID_COL).filter(|s| !s.is_empty())?;
        let description = record.get(DESCRIPTION_COL).filter(|s| !s.is_empty())?;
        let name = record.get(NAME_COL).unwrap_or_default();

        let id = match raw_id.parse::<i64>() {
            Ok(id) => id,
            Err(_) => {
                debug!("Unparseable achievement id '{}', using 0", raw_id);
                0
            }
        };

        Some(Self::new(id, name, description))
    }
}

/// Immutable, index-aligned achievement corpus
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    ids: Vec<i64>,
    names: Vec<String>,
    descriptions: Vec<String>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = CorpusEntry>,
    {
        let mut corpus = Self::new();
        for entry in entries {
            corpus.push(entry);
        }
        corpus
    }

    fn push(&mut self, entry: CorpusEntry) {
        self.ids.push(entry.id);
        self.names.push(entry.name);
        self.descriptions.push(entry.description);
    }

    /// Parse a headerless CSV document into a corpus
    pub fn from_csv_reader<R: std::io::Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(reader);

        let mut corpus = Self::new();
        let mut skipped = 0usize;
        for record in csv_reader.records() {
            let record = record?;
            match CorpusEntry::from_record(&record) {
                Some(entry) => corpus.push(entry),
                None => skipped += 1,
            }
        }

        debug!("Skipped {} rows without id or description", skipped);
        Ok(corpus)
    }

    /// Fetch and parse the dataset; any transport, status or parse failure is returned
    pub async fn fetch(client: &reqwest::Client, url: &str) -> Result<Self> {
        info!("Fetching {}...", url);

        let response = client.get(url).send().await?;
        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(AchMapError::Status(status.to_string()));
        }

        let body = response.bytes().await?;
        let corpus = Self::from_csv_reader(body.as_ref())?;

        info!("Got {} achievements", corpus.len());
        Ok(corpus)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Id at a corpus position; panics when `index >= len()`
    pub fn id(&self, index: usize) -> i64 {
        self.ids[index]
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn descriptions(&self) -> &[String] {
        &self.descriptions
    }
}

/// HTTP client used for the one-time dataset download
pub fn build_client() -> Result<reqwest::Client> {
    let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn local_client() -> reqwest::Client {
        reqwest::Client::builder().no_proxy().build().unwrap()
    }

    /// Answer a single request on localhost with a canned HTTP response
    async fn serve_once(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 4096];
            let _ = socket.read(&mut request).await;
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });
        format!("http://{}/Achievement.csv", addr)
    }

    const SHEET: &str = "\
key,0,1,2,3
#,Category,Name,Description,Points
1,1,To Crush Your Enemies I,Defeat 100 enemies.,5
2,1,,Hidden achievement with no name.,0
3,1,Empty Description,,10
,1,No Id,Has a description but no id.,0
";

    #[test]
    fn keeps_aligned_rows_and_skips_incomplete_ones() {
        let corpus = Corpus::from_csv_reader(SHEET.as_bytes()).unwrap();

        // key row, # row, 1 and 2 survive; 3 and the id-less row are dropped
        assert_eq!(corpus.len(), 4);
        assert_eq!(corpus.names().len(), corpus.descriptions().len());
        assert_eq!(corpus.id(2), 1);
        assert_eq!(corpus.names()[2], "To Crush Your Enemies I");
        assert_eq!(corpus.descriptions()[2], "Defeat 100 enemies.");
        assert_eq!(corpus.names()[3], "");
    }

    #[test]
    fn unparseable_ids_default_to_zero() {
        let corpus = Corpus::from_csv_reader(SHEET.as_bytes()).unwrap();
        assert_eq!(corpus.id(0), 0);
        assert_eq!(corpus.id(1), 0);
    }

    #[test]
    fn quoted_fields_keep_commas() {
        let sheet = "7,1,\"Mapping: The Aery\",\"Complete the Aery, then rest.\"\n";
        let corpus = Corpus::from_csv_reader(sheet.as_bytes()).unwrap();
        assert_eq!(corpus.names()[0], "Mapping: The Aery");
        assert_eq!(corpus.descriptions()[0], "Complete the Aery, then rest.");
    }

    #[test]
    fn ragged_rows_are_a_parse_error() {
        let sheet = "1,1,Name,Description\n2,1,Name\n";
        let err = Corpus::from_csv_reader(sheet.as_bytes()).unwrap_err();
        assert!(matches!(err, AchMapError::Csv(_)));
    }

    #[test]
    fn from_entries_preserves_order() {
        let corpus = Corpus::from_entries(vec![
            CorpusEntry::new(10, "a", "b"),
            CorpusEntry::new(20, "c", "d"),
        ]);
        assert_eq!(corpus.id(0), 10);
        assert_eq!(corpus.id(1), 20);
        assert_eq!(corpus.len(), 2);
    }

    #[tokio::test]
    async fn fetch_parses_a_successful_response() {
        let url = serve_once(
            "HTTP/1.1 200 OK\r\ncontent-length: 42\r\nconnection: close\r\n\r\n\
             100,1,Mapping: Dragon's Den,Clear the Den\n",
        )
        .await;
        let corpus = Corpus::fetch(&local_client(), &url).await.unwrap();
        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus.id(0), 100);
    }

    #[tokio::test]
    async fn fetch_fails_on_non_success_status() {
        let url = serve_once(
            "HTTP/1.1 404 Not Found\r\ncontent-length: 0\r\nconnection: close\r\n\r\n",
        )
        .await;
        let err = Corpus::fetch(&local_client(), &url).await.unwrap_err();
        match err {
            AchMapError::Status(status) => assert_eq!(status, "404 Not Found"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn fetch_fails_on_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let url = format!("http://{}/Achievement.csv", addr);
        let err = Corpus::fetch(&local_client(), &url).await.unwrap_err();
        assert!(matches!(err, AchMapError::Http(_)));
    }
}
