//! Shared utilities for integration testing.
//!
//! Hosts an in-process fake key-value store speaking just enough of the
//! wire protocol (PING, GET, QUIT) for the store client to run against a
//! real socket. Behavior is programmable per test: fixed records, forced
//! GET failures, artificial latency, and a kill switch that severs live
//! connections.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::broadcast;

/// Handle to a running fake store.
pub struct FakeStore {
    addr: SocketAddr,
    get_calls: Arc<AtomicU32>,
    kill_tx: broadcast::Sender<()>,
}

#[derive(Clone, Default)]
struct Behavior {
    records: HashMap<String, String>,
    fail_gets: bool,
    get_delay: Option<Duration>,
}

impl FakeStore {
    /// Address the store is listening on, as `host:port`.
    pub fn address(&self) -> String {
        self.addr.to_string()
    }

    /// Number of GET commands received so far.
    pub fn get_calls(&self) -> u32 {
        self.get_calls.load(Ordering::SeqCst)
    }

    /// Sever all live connections and stop accepting new ones.
    #[allow(dead_code)]
    pub fn kill(&self) {
        let _ = self.kill_tx.send(());
    }
}

/// Start a fake store serving the given records on an ephemeral port.
pub async fn start_fake_store(records: HashMap<String, String>) -> FakeStore {
    start_with(Behavior {
        records,
        ..Behavior::default()
    })
    .await
}

/// Start a fake store that accepts PING but fails every GET.
#[allow(dead_code)]
pub async fn start_failing_store() -> FakeStore {
    start_with(Behavior {
        fail_gets: true,
        ..Behavior::default()
    })
    .await
}

/// Start a fake store that delays each GET reply by `delay`.
#[allow(dead_code)]
pub async fn start_slow_store(records: HashMap<String, String>, delay: Duration) -> FakeStore {
    start_with(Behavior {
        records,
        get_delay: Some(delay),
        ..Behavior::default()
    })
    .await
}

async fn start_with(behavior: Behavior) -> FakeStore {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let get_calls = Arc::new(AtomicU32::new(0));
    let (kill_tx, _) = broadcast::channel(1);

    let counter = get_calls.clone();
    let tx = kill_tx.clone();
    tokio::spawn(async move {
        let mut kill_rx = tx.subscribe();
        loop {
            tokio::select! {
                accepted = listener.accept() => {
                    let Ok((socket, _)) = accepted else { break };
                    tokio::spawn(handle_conn(
                        socket,
                        behavior.clone(),
                        counter.clone(),
                        tx.subscribe(),
                    ));
                }
                _ = kill_rx.recv() => break,
            }
        }
    });

    FakeStore {
        addr,
        get_calls,
        kill_tx,
    }
}

async fn handle_conn(
    socket: TcpStream,
    behavior: Behavior,
    get_calls: Arc<AtomicU32>,
    mut kill: broadcast::Receiver<()>,
) {
    let (read_half, mut write_half) = socket.into_split();
    let mut reader = BufReader::new(read_half);

    loop {
        let command = tokio::select! {
            cmd = read_command(&mut reader) => match cmd {
                Some(c) => c,
                None => return,
            },
            // Dropping both halves severs the connection mid-stream.
            _ = kill.recv() => return,
        };

        let name = command
            .first()
            .map(|s| s.to_ascii_uppercase())
            .unwrap_or_default();

        let reply = match name.as_str() {
            "PING" => "+PONG\r\n".to_string(),
            "GET" => {
                get_calls.fetch_add(1, Ordering::SeqCst);
                if let Some(delay) = behavior.get_delay {
                    tokio::time::sleep(delay).await;
                }
                if behavior.fail_gets {
                    "-ERR simulated backend failure\r\n".to_string()
                } else {
                    match command.get(1).and_then(|key| behavior.records.get(key)) {
                        Some(value) => format!("${}\r\n{}\r\n", value.len(), value),
                        None => "$-1\r\n".to_string(),
                    }
                }
            }
            "QUIT" => {
                let _ = write_half.write_all(b"+OK\r\n").await;
                return;
            }
            _ => "-ERR unknown command\r\n".to_string(),
        };

        if write_half.write_all(reply.as_bytes()).await.is_err() {
            return;
        }
    }
}

/// Read one command: an array of bulk strings. Returns None on EOF or a
/// malformed frame.
async fn read_command<R>(reader: &mut R) -> Option<Vec<String>>
where
    R: AsyncBufRead + Unpin,
{
    let mut header = String::new();
    if reader.read_line(&mut header).await.ok()? == 0 {
        return None;
    }
    let argc: usize = header.trim_end().strip_prefix('*')?.parse().ok()?;

    let mut args = Vec::with_capacity(argc);
    for _ in 0..argc {
        let mut len_line = String::new();
        if reader.read_line(&mut len_line).await.ok()? == 0 {
            return None;
        }
        let len: usize = len_line.trim_end().strip_prefix('$')?.parse().ok()?;

        let mut buf = vec![0u8; len + 2];
        reader.read_exact(&mut buf).await.ok()?;
        buf.truncate(len);
        args.push(String::from_utf8(buf).ok()?);
    }
    Some(args)
}
