#![allow(dead_code)]

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use registro_sdk::{BlockRecord, NewBlock, GENESIS_NAME};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// In-process stand-in for the ledger node: the two real endpoints over a
/// shared chain, plus the knobs the tests turn.
pub struct MockLedger {
    pub base_url: String,
    pub state: Arc<NodeState>,
}

#[derive(Default)]
pub struct NodeState {
    chain: Mutex<Vec<BlockRecord>>,
    chain_hits: AtomicUsize,
    fail_chain: AtomicBool,
    garble_chain: AtomicBool,
    reject_adds: AtomicBool,
    echo_genesis: AtomicBool,
    delay_first_chain: AtomicBool,
}

/// The bootstrap record every fresh node creates for itself.
pub fn genesis_block() -> BlockRecord {
    BlockRecord::new("0", GENESIS_NAME, "N/A", "N/A")
}

impl MockLedger {
    pub async fn start() -> Self {
        Self::start_with(vec![genesis_block()]).await
    }

    pub async fn start_with(chain: Vec<BlockRecord>) -> Self {
        let state = Arc::new(NodeState::default());
        *state.chain.lock().unwrap() = chain;

        let app = Router::new()
            .route("/chain", get(get_chain))
            .route("/add_block", post(add_block))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock node");
        let addr = listener.local_addr().expect("mock node addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve mock node");
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    pub fn chain_hits(&self) -> usize {
        self.state.chain_hits.load(Ordering::SeqCst)
    }

    pub fn stored_chain(&self) -> Vec<BlockRecord> {
        self.state.chain.lock().unwrap().clone()
    }

    /// `GET /chain` answers 500.
    pub fn fail_chain(&self, on: bool) {
        self.state.fail_chain.store(on, Ordering::SeqCst);
    }

    /// `GET /chain` answers 200 with a body that is not a chain.
    pub fn garble_chain(&self, on: bool) {
        self.state.garble_chain.store(on, Ordering::SeqCst);
    }

    /// `POST /add_block` answers 400 without storing anything.
    pub fn reject_adds(&self, on: bool) {
        self.state.reject_adds.store(on, Ordering::SeqCst);
    }

    /// `POST /add_block` stores the record but echoes the bootstrap record.
    pub fn echo_genesis(&self, on: bool) {
        self.state.echo_genesis.store(on, Ordering::SeqCst);
    }

    /// The first `GET /chain` stalls long enough for a second one to pass it.
    pub fn delay_first_chain(&self, on: bool) {
        self.state.delay_first_chain.store(on, Ordering::SeqCst);
    }
}

async fn get_chain(State(state): State<Arc<NodeState>>) -> Response {
    let hits = state.chain_hits.fetch_add(1, Ordering::SeqCst) + 1;

    if state.delay_first_chain.load(Ordering::SeqCst) && hits == 1 {
        tokio::time::sleep(Duration::from_millis(250)).await;
    }

    if state.fail_chain.load(Ordering::SeqCst) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "chain unavailable").into_response();
    }

    if state.garble_chain.load(Ordering::SeqCst) {
        return Json(serde_json::json!({ "not": "a chain" })).into_response();
    }

    let chain = state.chain.lock().unwrap().clone();
    Json(chain).into_response()
}

async fn add_block(
    State(state): State<Arc<NodeState>>,
    Json(record): Json<NewBlock>,
) -> Response {
    if state.reject_adds.load(Ordering::SeqCst) {
        return (StatusCode::BAD_REQUEST, "record rejected").into_response();
    }

    let stored = {
        let mut chain = state.chain.lock().unwrap();
        let mut block = BlockRecord::new(
            record.cpf,
            record.nome,
            record.naturalidade,
            record.data_nascimento,
        );
        block.index = Some(chain.len() as u64);
        block.timestamp = Some("2024-05-01T12:00:00".to_string());
        chain.push(block.clone());
        block
    };

    if state.echo_genesis.load(Ordering::SeqCst) {
        return (StatusCode::CREATED, Json(genesis_block())).into_response();
    }

    (StatusCode::CREATED, Json(stored)).into_response()
}
