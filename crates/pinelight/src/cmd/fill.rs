use pinelight_session::Session;
use tracing::debug;

use crate::cmd::FillArgs;
use crate::color::parse_rgba;
use crate::exit::{session_error, CliResult, SUCCESS};

pub async fn run(args: FillArgs) -> CliResult<i32> {
    let rgba = parse_rgba(&args.color)?;

    let mut session = Session::new(args.connect.token, &args.connect.addr);
    session
        .connect()
        .await
        .map_err(|err| session_error("connect failed", err))?;

    let (width, height) = session.canvas_size();
    debug!(width, height, color = %args.color, "filling canvas");
    let mut pixels = Vec::with_capacity(width as usize * height as usize * 4);
    for _ in 0..width as usize * height as usize {
        pixels.extend_from_slice(&rgba);
    }

    let result = session
        .send_canvas(&pixels)
        .await
        .map_err(|err| session_error("canvas update failed", err));
    session.close().await;
    result?;

    Ok(SUCCESS)
}
