use pinelight_session::Session;

use crate::cmd::StripArgs;
use crate::color::{pack_rgb, parse_rgba};
use crate::exit::{session_error, CliResult, SUCCESS};

pub async fn run(args: StripArgs) -> CliResult<i32> {
    let color = pack_rgb(parse_rgba(&args.color)?);

    let mut session = Session::new(args.connect.token, &args.connect.addr);
    session
        .connect()
        .await
        .map_err(|err| session_error("connect failed", err))?;

    let values = vec![color; session.strip_len()];
    let result = session
        .send_raw_pixels(&values)
        .await
        .map_err(|err| session_error("strip update failed", err));
    session.close().await;
    result?;

    Ok(SUCCESS)
}
