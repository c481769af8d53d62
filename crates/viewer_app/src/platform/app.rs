use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use log::LevelFilter;
use viewer_core::{update, Msg, PageState};
use viewer_engine::{UploadHandle, UploadSettings};
use viewer_logging::{viewer_error, viewer_info, viewer_warn, LogDestination};

use super::effects::EffectRunner;
use super::input::{parse_command, Command, HELP_TEXT};
use super::output::{PageWriter, DEFAULT_PAGE_FILE};
use super::ui;

const POLL_INTERVAL: Duration = Duration::from_millis(75);

pub fn run_app() -> anyhow::Result<()> {
    if !viewer_logging::initialize(LogDestination::default(), LevelFilter::Info) {
        eprintln!("Warning: logging disabled");
    }

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let (cmd_tx, cmd_rx) = mpsc::channel::<Command>();

    let effects = EffectRunner::new(UploadHandle::new(UploadSettings::default()), msg_tx);
    let writer = PageWriter::new(PathBuf::from(DEFAULT_PAGE_FILE));
    let mut app = App::new(effects, writer);
    app.render().context("writing initial page")?;

    println!("{}", HELP_TEXT);
    println!("page: {}", app.writer.target().display());

    // Stdin stands in for the page's controls.
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if cmd_tx.send(parse_command(&line)).is_err() {
                break;
            }
        }
        let _ = cmd_tx.send(Command::Quit);
    });

    loop {
        match cmd_rx.recv_timeout(POLL_INTERVAL) {
            Ok(Command::Quit) | Err(mpsc::RecvTimeoutError::Disconnected) => break,
            Ok(Command::Page(msg)) => app.dispatch_msg(msg),
            Ok(Command::Help) => println!("{}", HELP_TEXT),
            Ok(Command::Unknown(line)) => {
                viewer_warn!("Unknown command: {}", line);
                println!("unknown command: {line}");
            }
            Ok(Command::Empty) | Err(mpsc::RecvTimeoutError::Timeout) => {}
        }

        while let Ok(msg) = msg_rx.try_recv() {
            app.dispatch_msg(msg);
        }
        for msg in app.effects.poll() {
            app.dispatch_msg(msg);
        }
    }

    viewer_info!("Viewer closed");
    Ok(())
}

struct App {
    state: PageState,
    effects: EffectRunner,
    writer: PageWriter,
}

impl App {
    fn new(effects: EffectRunner, writer: PageWriter) -> Self {
        Self {
            state: PageState::new(),
            effects,
            writer,
        }
    }

    fn dispatch_msg(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        self.state = state;

        self.effects.run(effects);

        if was_dirty {
            if let Err(err) = self.render() {
                viewer_error!("Failed to write page: {}", err);
            }
        }
    }

    fn render(&self) -> anyhow::Result<()> {
        let view = self.state.view();
        self.writer
            .write(&ui::render::render_page(&view))
            .with_context(|| format!("writing {}", self.writer.target().display()))?;
        println!("{}", ui::render::status_line(&view));
        Ok(())
    }
}
