// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{str::FromStr, time::Duration};

use r3bl_console::{BasicColor, Console, ConsoleConfig, NotificationEvent, NotificationMask,
                   StyleAttr, TracingConfig, line_segments, try_initialize_logging_global};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
use tokio::{select, time::interval};
use tracing_core::LevelFilter;

/// Type one of these at the prompt and press <kbd>Enter</kbd>. Input is blocked after
/// every command until it has been handled.
#[derive(Debug, PartialEq, EnumString, EnumIter, Display)]
enum Command {
    #[strum(ascii_case_insensitive)]
    Trace,

    #[strum(ascii_case_insensitive)]
    Untrace,

    #[strum(ascii_case_insensitive)]
    Ping,

    #[strum(ascii_case_insensitive)]
    Clear,

    #[strum(ascii_case_insensitive)]
    Info,

    #[strum(ascii_case_insensitive)]
    Exit,
}

fn info_message() -> String {
    let commands = Command::iter()
        .map(|it| it.to_string())
        .collect::<Vec<String>>();
    format!("commands: {commands:?}, scroll with Up, Down, Left, Right")
}

#[tokio::main]
#[allow(clippy::needless_return)]
async fn main() -> miette::Result<()> {
    // The console owns the terminal, so logs go to a file.
    try_initialize_logging_global(TracingConfig::new_file(
        Some("console_demo.log".to_string()),
        LevelFilter::DEBUG,
    ))?;

    let config = ConsoleConfig::default()
        .with_trace_after_run(true)
        .with_block_input_after_enter(true)
        .with_prompt_style(StyleAttr::default().fg(BasicColor::Cyan).bold(true))
        .with_notification_mask(
            NotificationMask::CTRL_C
                | NotificationMask::TRY_TO_GET_UPPER
                | NotificationMask::TRY_TO_GET_LOWER,
        );

    let Some((console, mut receivers)) = Console::try_new_with_terminal(config)? else {
        println!("This demo needs an interactive terminal.");
        return Ok(());
    };

    console.send_line_back(&info_message()).await?;

    let heartbeat = {
        let console = console.clone();
        tokio::spawn(async move {
            let mut ticker = interval(Duration::from_secs(3));
            let mut count = 0_u64;
            loop {
                ticker.tick().await;
                count += 1;
                let dim = StyleAttr::default().dim(true);
                if console
                    .send_styled_line_back(line_segments![dim, format!("heartbeat {count}")])
                    .await
                    .is_err()
                {
                    break;
                }
            }
        })
    };

    loop {
        select! {
            maybe_command = receivers.commands.recv() => {
                let Some(command) = maybe_command else { break };
                if handle_command(&console, &command).await?.is_break() {
                    break;
                }
            }
            maybe_notification = receivers.notifications.recv() => {
                let Some(notification) = maybe_notification else { break };
                match notification.event {
                    NotificationEvent::CtrlKey { .. } => break,
                    other => {
                        let yellow = StyleAttr::default().fg(BasicColor::Yellow);
                        console
                            .send_styled_line_back(line_segments![yellow, format!("{other:?}")])
                            .await?;
                    }
                }
            }
        }
    }

    heartbeat.abort();
    console.stop().await?;
    Ok(())
}

async fn handle_command(
    console: &Console,
    command: &str,
) -> miette::Result<std::ops::ControlFlow<()>> {
    match Command::from_str(command.trim()) {
        Ok(Command::Trace) => console.set_trace(true).await?,
        Ok(Command::Untrace) => console.set_trace(false).await?,
        Ok(Command::Ping) => console.send_line_back("pong").await?,
        Ok(Command::Clear) => {
            console.clear().await?;
            console.send_line_back("你已经清空了屏幕").await?;
        }
        Ok(Command::Info) => console.send_line_back(&info_message()).await?,
        Ok(Command::Exit) => return Ok(std::ops::ControlFlow::Break(())),
        Err(_) => {
            let red = StyleAttr::default().fg(BasicColor::Red);
            console
                .send_styled_line_back(line_segments![red, "unknown command ", StyleAttr::default(), command])
                .await?;
        }
    }
    console.set_block_input(false).await?;
    Ok(std::ops::ControlFlow::Continue(()))
}
