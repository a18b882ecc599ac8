use crate::adapters::terminal::{render_banner, render_screen, RenderOptions};
use crate::core::lookup::{LookupService, Screen};
use crate::core::RegistryClient;
use crate::utils::error::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

pub const PROMPT: &str = "CNPJ: ";
pub const QUIT: &str = "sair";

/// Interactive prompt: every line read is one search, an empty line included.
/// Stops at end of input or on `sair`. Returns how many searches were made.
pub async fn run_session<C, R, W>(
    service: &LookupService<C>,
    options: &RenderOptions,
    input: R,
    mut output: W,
) -> Result<usize>
where
    C: RegistryClient,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    output.write_all(render_banner().as_bytes()).await?;

    let mut lines = input.lines();
    let mut searches = 0;
    loop {
        output.write_all(format!("\n{}", PROMPT).as_bytes()).await?;
        output.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().eq_ignore_ascii_case(QUIT) {
            break;
        }

        let screen = service.handle(&line).await;
        searches += 1;
        output.write_all(b"\n").await?;
        output.write_all(render(&screen, options)?.as_bytes()).await?;
    }

    output.write_all(b"\n").await?;
    output.flush().await?;
    tracing::debug!("Session closed after {} searches", searches);
    Ok(searches)
}

/// Rendered screen, always newline-terminated.
pub fn render(screen: &Screen, options: &RenderOptions) -> Result<String> {
    let mut out = render_screen(screen, options)?;
    if !out.ends_with('\n') {
        out.push('\n');
    }
    Ok(out)
}
