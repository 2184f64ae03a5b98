//! Real-socket harness for users API behaviour tests.
//!
//! Actix spawns server tasks with `spawn_local`, so the world owns a
//! current-thread runtime and a `LocalSet` that every request is driven on.
//! Dropping the [`WorldFixture`] stops the server even when a step panics.

use std::cell::RefCell;
use std::net::TcpListener;
use std::rc::Rc;
use std::sync::Arc;

use actix_web::dev::ServerHandle;
use actix_web::http::Method;
use actix_web::{HttpServer, web};
use awc::Client;
use rstest::fixture;
use serde_json::Value;
use tokio::runtime::Runtime;
use tokio::task::LocalSet;
use users_api::inbound::http::health::HealthState;
use users_api::inbound::http::payload::DEFAULT_JSON_LIMIT;
use users_api::inbound::http::state::HttpState;
use users_api::middleware::trace::TRACE_ID_HEADER;
use users_api::outbound::memory::MemoryUserRepository;
use users_api::server::{AppDependencies, build_app};

pub(crate) struct UsersWorld {
    runtime: Runtime,
    local: LocalSet,
    base_url: String,
    server: ServerHandle,
    pub(crate) last_status: Option<u16>,
    pub(crate) last_body: Option<Value>,
    pub(crate) last_trace_id: Option<String>,
}

pub(crate) type SharedWorld = Rc<RefCell<UsersWorld>>;

pub(crate) struct WorldFixture {
    world: SharedWorld,
}

impl WorldFixture {
    pub(crate) fn world(&self) -> SharedWorld {
        self.world.clone()
    }
}

impl Drop for WorldFixture {
    fn drop(&mut self) {
        // The LocalSet is driven while the world is borrowed; the future must
        // not borrow it again.
        let ctx = self.world.borrow();
        let server = ctx.server.clone();
        ctx.local.block_on(&ctx.runtime, async move {
            server.stop(true).await;
        });
    }
}

async fn spawn_server() -> Result<(String, ServerHandle), String> {
    let listener = TcpListener::bind("127.0.0.1:0").map_err(|err| err.to_string())?;
    let addr = listener.local_addr().map_err(|err| err.to_string())?;

    let deps = AppDependencies {
        health_state: web::Data::new(HealthState::new()),
        http_state: web::Data::new(HttpState::with_repository(Arc::new(
            MemoryUserRepository::new(),
        ))),
        json_limit: DEFAULT_JSON_LIMIT,
    };
    deps.health_state.mark_ready();

    let server = HttpServer::new(move || build_app(deps.clone()))
    .disable_signals()
    .workers(1)
    .listen(listener)
    .map_err(|err| err.to_string())?
    .run();

    let handle = server.handle();
    actix_web::rt::spawn(server);

    Ok((format!("http://{addr}"), handle))
}

#[fixture]
pub(crate) fn world() -> WorldFixture {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("tokio runtime");
    let local = LocalSet::new();

    let (base_url, server) = local
        .block_on(&runtime, spawn_server())
        .expect("server should start");

    WorldFixture {
        world: Rc::new(RefCell::new(UsersWorld {
            runtime,
            local,
            base_url,
            server,
            last_status: None,
            last_body: None,
            last_trace_id: None,
        })),
    }
}

/// Send a request and record its status, trace id and JSON body (if any).
pub(crate) fn perform_request(
    world: &WorldFixture,
    method: Method,
    path: &str,
    payload: Option<Value>,
) {
    let shared = world.world();
    let url = format!("{}{path}", shared.borrow().base_url);
    let (status, trace_id, body) = {
        let ctx = shared.borrow();
        ctx.local.block_on(&ctx.runtime, async move {
            let request = Client::default().request(method, url);
            let mut response = match payload {
                Some(payload) => request.send_json(&payload).await.expect("json request"),
                None => request.send().await.expect("request"),
            };
            let status = response.status().as_u16();
            let trace_id = response
                .headers()
                .get(TRACE_ID_HEADER)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned);
            let bytes = response.body().await.expect("body");
            let body = (!bytes.is_empty())
                .then(|| serde_json::from_slice::<Value>(&bytes).expect("json body"));
            (status, trace_id, body)
        })
    };

    let mut ctx = shared.borrow_mut();
    ctx.last_status = Some(status);
    ctx.last_trace_id = trace_id;
    ctx.last_body = body;
}
