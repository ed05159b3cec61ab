#![allow(dead_code)]

use std::{
    io::{BufRead, BufReader, Read, Write},
    net::TcpListener,
    path::PathBuf,
    sync::Mutex,
    thread::{self, JoinHandle},
};

use career_wizard::{
    domain::{catalog::ids, SubmissionPayload},
    form::MemoryForm,
    storage::{MemoryStore, SnapshotStore, SNAPSHOT_KEY},
    submit::{Transport, TransportError, TransportResponse},
    wizard::{Wizard, WizardSettings},
};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates a unique data directory that outlives the calling test.
pub fn temp_base() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

pub fn wizard_with(store: MemoryStore) -> Wizard<MemoryForm> {
    Wizard::start(
        MemoryForm::survey(),
        Box::new(store),
        WizardSettings {
            endpoint: "http://survey.test/save".into(),
            ..WizardSettings::default()
        },
    )
}

/// Answers the four required steps (INTJ / Math / Logic / Science) and lands
/// on the family step.
pub fn answer_required(wizard: &mut Wizard<MemoryForm>) {
    wizard.set_field(ids::MBTI, "INTJ");
    wizard.next();
    wizard.set_checked(ids::SUBJECTS, "Math", true);
    wizard.next();
    wizard.set_checked(ids::STRENGTHS, "Logic", true);
    wizard.next();
    wizard.set_checked(ids::INTERESTS, "Science", true);
    wizard.next();
    assert!(wizard.is_last_step(), "required answers should reach the last step");
}

/// Transport double that records payloads and replies with a canned result.
/// When given a store it also records whether a snapshot existed at the
/// moment the request went out.
pub struct FakeTransport {
    reply: Result<TransportResponse, String>,
    observed_store: Option<MemoryStore>,
    pub payloads: Mutex<Vec<SubmissionPayload>>,
    pub urls: Mutex<Vec<String>>,
    pub snapshot_at_request: Mutex<Vec<Option<String>>>,
}

impl FakeTransport {
    pub fn replying(status: u16, body: &str) -> Self {
        Self::with_reply(Ok(TransportResponse::new(status, body)))
    }

    pub fn failing(reason: &str) -> Self {
        Self::with_reply(Err(reason.to_string()))
    }

    fn with_reply(reply: Result<TransportResponse, String>) -> Self {
        Self {
            reply,
            observed_store: None,
            payloads: Mutex::new(Vec::new()),
            urls: Mutex::new(Vec::new()),
            snapshot_at_request: Mutex::new(Vec::new()),
        }
    }

    pub fn observing(mut self, store: MemoryStore) -> Self {
        self.observed_store = Some(store);
        self
    }

    pub fn calls(&self) -> usize {
        self.payloads.lock().unwrap().len()
    }
}

impl Transport for FakeTransport {
    fn post_json(
        &self,
        url: &str,
        payload: &SubmissionPayload,
    ) -> Result<TransportResponse, TransportError> {
        self.payloads.lock().unwrap().push(payload.clone());
        self.urls.lock().unwrap().push(url.to_string());
        if let Some(store) = &self.observed_store {
            let snapshot = store.get(SNAPSHOT_KEY).unwrap();
            self.snapshot_at_request.lock().unwrap().push(snapshot);
        }
        self.reply
            .clone()
            .map_err(TransportError::Request)
    }
}

/// Serves exactly one HTTP request with the given status and body. The join
/// handle yields the raw request (head plus body) that was received.
pub fn serve_once(status: u16, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test server");
    let addr = listener.local_addr().expect("server address");
    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().expect("accept request");
        let mut reader = BufReader::new(stream);
        let mut head = String::new();
        let mut content_length = 0usize;
        loop {
            let mut line = String::new();
            reader.read_line(&mut line).expect("read request line");
            if line == "\r\n" || line.is_empty() {
                break;
            }
            if let Some((name, value)) = line.split_once(':') {
                if name.eq_ignore_ascii_case("content-length") {
                    content_length = value.trim().parse().unwrap_or(0);
                }
            }
            head.push_str(&line);
        }
        let mut request_body = vec![0u8; content_length];
        reader.read_exact(&mut request_body).expect("read request body");

        let response = format!(
            "HTTP/1.1 {status} Test\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let mut stream = reader.into_inner();
        stream
            .write_all(response.as_bytes())
            .expect("write response");
        stream.flush().ok();

        head.push_str("\r\n");
        head.push_str(&String::from_utf8_lossy(&request_body));
        head
    });
    (format!("http://{addr}"), handle)
}
