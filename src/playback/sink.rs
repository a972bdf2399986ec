use crate::{
    foundation::error::AlephResult,
    scene::graph::EntryId,
    scene::primitive::Primitive,
    timeline::step::{Conceal, Motion, Reveal},
};

/// Summary handed to a [`PlaybackSink`] before the first command.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlaybackInfo {
    /// Number of steps in the timeline.
    pub steps: usize,
    /// Logical duration of the whole timeline in seconds.
    pub duration_secs: f64,
}

/// One observable change made while playing a timeline.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum PlaybackCommand {
    /// A step starts at `start_secs` on the logical clock.
    BeginStep {
        index: usize,
        start_secs: f64,
        run_time: f64,
    },
    Create {
        id: EntryId,
        primitive: Primitive,
        reveal: Reveal,
    },
    /// `from` is the state before the step, `to` the state after it.
    Transform {
        id: EntryId,
        from: Primitive,
        to: Primitive,
    },
    Remove {
        id: EntryId,
        conceal: Conceal,
    },
    /// `end` is the state reached after the step's run time.
    Continuous {
        id: EntryId,
        motion: Motion,
        end: Primitive,
    },
    /// Every live id at the time of the clear, in insertion order.
    Clear {
        ids: Vec<EntryId>,
        conceal: Conceal,
    },
    Wait {
        secs: f64,
    },
    End {
        duration_secs: f64,
    },
}

/// Consumer of the ordered command stream produced by playback.
///
/// Ordering contract: commands arrive in playback order, every step's commands are preceded by
/// its `BeginStep`, and `End` is sent only when every step applied.
pub trait PlaybackSink {
    /// Called once before any command.
    fn begin(&mut self, info: &PlaybackInfo) -> AlephResult<()>;
    /// Receive one command.
    fn command(&mut self, cmd: &PlaybackCommand) -> AlephResult<()>;
    /// Called once after the last command, including after a failed step.
    fn end(&mut self) -> AlephResult<()>;
}

/// In-memory sink that records every command, for tests and JSON dumps.
#[derive(Clone, Debug, Default, serde::Serialize)]
pub struct CommandLog {
    info: Option<PlaybackInfo>,
    commands: Vec<PlaybackCommand>,
}

impl CommandLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Info captured in `begin`, if playback started.
    pub fn info(&self) -> Option<&PlaybackInfo> {
        self.info.as_ref()
    }

    pub fn commands(&self) -> &[PlaybackCommand] {
        &self.commands
    }

    /// Step indices in the order their `BeginStep` commands arrived.
    pub fn step_order(&self) -> Vec<usize> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                PlaybackCommand::BeginStep { index, .. } => Some(*index),
                _ => None,
            })
            .collect()
    }

    pub fn to_json(&self) -> AlephResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl PlaybackSink for CommandLog {
    fn begin(&mut self, info: &PlaybackInfo) -> AlephResult<()> {
        self.info = Some(info.clone());
        self.commands.clear();
        Ok(())
    }

    fn command(&mut self, cmd: &PlaybackCommand) -> AlephResult<()> {
        self.commands.push(cmd.clone());
        Ok(())
    }

    fn end(&mut self) -> AlephResult<()> {
        Ok(())
    }
}

/// Sink that drops every command.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl PlaybackSink for NullSink {
    fn begin(&mut self, _info: &PlaybackInfo) -> AlephResult<()> {
        Ok(())
    }

    fn command(&mut self, _cmd: &PlaybackCommand) -> AlephResult<()> {
        Ok(())
    }

    fn end(&mut self) -> AlephResult<()> {
        Ok(())
    }
}
