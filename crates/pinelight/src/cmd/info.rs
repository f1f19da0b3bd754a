use pinelight_session::Session;

use crate::cmd::InfoArgs;
use crate::exit::{session_error, CliResult, SUCCESS};
use crate::output::{print_device, OutputFormat};

pub async fn run(args: InfoArgs, format: OutputFormat) -> CliResult<i32> {
    let mut session = Session::new(args.connect.token, &args.connect.addr);
    session
        .connect()
        .await
        .map_err(|err| session_error("connect failed", err))?;

    let (width, height) = session.canvas_size();
    print_device(&args.connect.addr, width, height, session.strip_len(), format);

    session.close().await;
    Ok(SUCCESS)
}
