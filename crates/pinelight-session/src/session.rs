use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::{connect_async, tungstenite::Message, MaybeTlsStream, WebSocketStream};
use tracing::debug;

use pinelight_proto::{codec, Payload, Reply, Request};

use crate::error::{Result, SessionError};

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// A client session for one LED server.
///
/// Owns the WebSocket stream exclusively and moves between two states:
/// Disconnected and Connected. [`connect`](Session::connect) performs the full
/// handshake (authenticate, canvas geometry, strip length) and only reports
/// Connected once all three round-trips succeed. There is no terminal state —
/// after any failure or [`close`](Session::close) the session can be
/// reconnected with another `connect` call.
///
/// One session per credential pair; build a new one if token or destination
/// change.
pub struct Session {
    token: String,
    dest: String,
    ws: Option<WsStream>,
    connected: bool,
    canvas_width: u32,
    canvas_height: u32,
    strip_len: usize,
}

impl Session {
    /// Create a disconnected session for `dest` (e.g. `"localhost:9000"`).
    pub fn new(token: impl Into<String>, dest: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            dest: dest.into(),
            ws: None,
            connected: false,
            canvas_width: 0,
            canvas_height: 0,
            strip_len: 0,
        }
    }

    /// Whether the last handshake completed and the connection is usable.
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Canvas geometry as of the last successful handshake.
    pub fn canvas_size(&self) -> (u32, u32) {
        (self.canvas_width, self.canvas_height)
    }

    /// Number of LEDs on the strip as of the last successful handshake.
    pub fn strip_len(&self) -> usize {
        self.strip_len
    }

    /// The destination host this session connects to.
    pub fn dest(&self) -> &str {
        &self.dest
    }

    /// Open the transport and run the handshake.
    ///
    /// Opens `ws://{dest}/ws`, authenticates with the stored token, then
    /// queries canvas geometry and strip length. Geometry is committed only
    /// when the whole handshake succeeds; any step failing leaves the session
    /// Disconnected with no half-populated state. Calling `connect` again
    /// after a failure is always legal and starts the handshake over.
    pub async fn connect(&mut self) -> Result<()> {
        if self.token.is_empty() {
            return Err(SessionError::Config("authentication token is empty"));
        }
        if self.ws.is_some() {
            // A fresh connect supersedes whatever the old stream was doing.
            self.abort_connection().await;
        }

        let url = format!("ws://{}/ws", self.dest);
        let (ws, _) = connect_async(&url).await?;
        debug!(dest = %self.dest, "websocket open, authenticating");
        self.ws = Some(ws);

        match self.handshake().await {
            Ok(()) => Ok(()),
            Err(err) => {
                self.abort_connection().await;
                Err(err)
            }
        }
    }

    async fn handshake(&mut self) -> Result<()> {
        let payload = self
            .round_trip(Request::Authenticate {
                secret: self.token.clone(),
            })
            .await
            .map_err(|err| match err {
                // The server rejects bad credentials with an error envelope.
                SessionError::Server(_) => SessionError::AuthenticationFailed,
                other => other,
            })?;
        match payload {
            Payload::Auth { success: true } => {}
            Payload::Auth { success: false } => return Err(SessionError::AuthenticationFailed),
            _ => {
                return Err(SessionError::UnexpectedReply {
                    expected: "authenticate",
                })
            }
        }
        self.connected = true;

        let (width, height) = match self.round_trip(Request::GetCanvasInfo).await? {
            Payload::CanvasInfo { width, height } => (width, height),
            _ => {
                return Err(SessionError::UnexpectedReply {
                    expected: "canvas info",
                })
            }
        };

        let strip_len = match self.round_trip(Request::GetPixels).await? {
            Payload::Pixels { leds } => leds.len(),
            _ => return Err(SessionError::UnexpectedReply { expected: "pixels" }),
        };

        self.canvas_width = width;
        self.canvas_height = height;
        self.strip_len = strip_len;
        debug!(width, height, strip_len, "handshake complete");
        Ok(())
    }

    /// Close the connection. Idempotent and infallible.
    ///
    /// Safe to call on a never-connected or already-closed session. Cached
    /// geometry survives; the next `connect` refreshes it.
    pub async fn close(&mut self) {
        self.abort_connection().await;
    }

    /// Replace the whole canvas with row-major RGBA bytes.
    ///
    /// The buffer must be exactly `width * height * 4` bytes long, checked
    /// before anything is sent. Fire-and-forget: the server nominally replies
    /// to this request, but no reply is awaited or decoded — the handshake
    /// round-trips are the only awaited exchanges. See the protocol notes in
    /// DESIGN.md before changing this.
    pub async fn send_canvas(&mut self, pixels: &[u8]) -> Result<()> {
        if !self.connected {
            return Err(SessionError::NotConnected);
        }
        let expected = self.canvas_width as usize * self.canvas_height as usize * 4;
        if pixels.len() != expected {
            return Err(SessionError::InvalidArgument {
                what: "pixel buffer",
                expected,
                actual: pixels.len(),
            });
        }
        self.fire(Request::SetCanvas {
            pixels: bytes::Bytes::copy_from_slice(pixels),
        })
        .await
    }

    /// Set every strip LED to a packed color value.
    ///
    /// The slice must have exactly `strip_len` elements, checked before
    /// anything is sent. Fire-and-forget, like [`send_canvas`](Session::send_canvas).
    pub async fn send_raw_pixels(&mut self, values: &[u64]) -> Result<()> {
        if !self.connected {
            return Err(SessionError::NotConnected);
        }
        if values.len() != self.strip_len {
            return Err(SessionError::InvalidArgument {
                what: "led values",
                expected: self.strip_len,
                actual: values.len(),
            });
        }
        self.fire(Request::SetPixels {
            leds: values.to_vec(),
        })
        .await
    }

    /// Send one envelope without awaiting a reply.
    async fn fire(&mut self, request: Request) -> Result<()> {
        let bytes = codec::encode(&request);
        let ws = self.ws.as_mut().ok_or(SessionError::NotConnected)?;
        match ws.send(Message::Binary(bytes.to_vec())).await {
            Ok(()) => Ok(()),
            Err(err) => {
                // Send failure means the stream is unusable; drop to Disconnected.
                self.drop_connection();
                Err(err.into())
            }
        }
    }

    /// Send one envelope, then await and decode exactly one reply.
    ///
    /// The protocol is strictly half-duplex; no request is outstanding when
    /// this is called, so the next binary frame is the reply to `request`.
    async fn round_trip(&mut self, request: Request) -> Result<Payload> {
        let bytes = codec::encode(&request);
        let ws = self.ws.as_mut().ok_or(SessionError::NotConnected)?;
        ws.send(Message::Binary(bytes.to_vec())).await?;

        loop {
            let msg = match ws.next().await {
                Some(Ok(msg)) => msg,
                Some(Err(err)) => return Err(err.into()),
                None => return Err(SessionError::Closed),
            };
            let data = match msg {
                Message::Binary(data) => data,
                // A compliant server only sends binary envelopes; text frames
                // go through the same decoder and fail as malformed bytes.
                Message::Text(text) => text.into_bytes(),
                Message::Ping(_) | Message::Pong(_) => continue,
                Message::Close(_) => return Err(SessionError::Closed),
                // Raw frames never surface from a message-level read.
                Message::Frame(_) => continue,
            };
            return match codec::decode(&data)? {
                Reply::Success(payload) => Ok(payload),
                Reply::Error(message) => Err(SessionError::Server(message)),
            };
        }
    }

    /// Tear the connection down with a best-effort close frame.
    async fn abort_connection(&mut self) {
        if let Some(mut ws) = self.ws.take() {
            if let Err(err) = ws.close(None).await {
                debug!(%err, "websocket close failed");
            }
        }
        self.connected = false;
    }

    /// Drop the stream without a close frame. For streams already broken.
    fn drop_connection(&mut self) {
        self.ws = None;
        self.connected = false;
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The token is credential material and never printed.
        f.debug_struct("Session")
            .field("dest", &self.dest)
            .field("connected", &self.connected)
            .field("canvas_width", &self.canvas_width)
            .field("canvas_height", &self.canvas_height)
            .field("strip_len", &self.strip_len)
            .finish_non_exhaustive()
    }
}
