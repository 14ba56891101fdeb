//! Stitch command types and raw stitch events

use serde::{Deserialize, Serialize};
use std::fmt;

/// Decoder code for a plain stitch
pub const STITCH: i32 = 0;
/// Decoder code for a travel move without a needle drop
pub const JUMP: i32 = 1;
/// Decoder code for a thread cut
pub const TRIM: i32 = 2;
/// Decoder code for a machine stop
pub const STOP: i32 = 3;
/// Decoder code for the end of the pattern
pub const END: i32 = 4;
/// Decoder code for a thread spool change
pub const COLOR_CHANGE: i32 = 5;
/// Decoder code for selecting a needle on multi-needle machines
pub const NEEDLE_SET: i32 = 9;
/// Decoder placeholder for records without a command
pub const NO_COMMAND: i32 = -1;

/// Command attached to a stitch event
///
/// Serialized as the decoder's integer code. Codes without a known
/// meaning are kept as `Unknown` so exotic files still import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum StitchCommand {
    /// Needle drop; extends the current path
    Stitch,
    /// Travel move, optionally drawn as a jump wire
    Jump,
    /// Thread cut; breaks path continuity
    Trim,
    /// Machine pause
    Stop,
    /// Active thread spool changes
    ColorChange,
    /// Needle selection
    NeedleSet,
    /// Pattern complete
    End,
    /// Any other decoder code
    Unknown(i32),
}

impl StitchCommand {
    /// Map a decoder command code to a command
    pub fn from_code(code: i32) -> Self {
        match code {
            STITCH => Self::Stitch,
            JUMP => Self::Jump,
            TRIM => Self::Trim,
            STOP => Self::Stop,
            END => Self::End,
            COLOR_CHANGE => Self::ColorChange,
            NEEDLE_SET => Self::NeedleSet,
            other => Self::Unknown(other),
        }
    }

    /// Decoder code for this command
    pub fn code(&self) -> i32 {
        match self {
            Self::Stitch => STITCH,
            Self::Jump => JUMP,
            Self::Trim => TRIM,
            Self::Stop => STOP,
            Self::End => END,
            Self::ColorChange => COLOR_CHANGE,
            Self::NeedleSet => NEEDLE_SET,
            Self::Unknown(code) => *code,
        }
    }

    /// Whether this command closes the open section
    ///
    /// Jumps close a section only when jump wires are hidden.
    pub fn closes_section(&self, show_jump_wires: bool) -> bool {
        match self {
            Self::Stitch => false,
            Self::Jump => !show_jump_wires,
            _ => true,
        }
    }

    /// Whether the event's point is appended to the (possibly new) open section
    pub fn keeps_point(&self, show_jump_wires: bool) -> bool {
        match self {
            Self::Stitch | Self::Stop | Self::NeedleSet | Self::Unknown(_) => true,
            Self::Jump => show_jump_wires,
            Self::Trim | Self::ColorChange | Self::End => false,
        }
    }
}

impl From<i32> for StitchCommand {
    fn from(code: i32) -> Self {
        Self::from_code(code)
    }
}

impl From<StitchCommand> for i32 {
    fn from(command: StitchCommand) -> Self {
        command.code()
    }
}

impl fmt::Display for StitchCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stitch => write!(f, "Stitch"),
            Self::Jump => write!(f, "Jump"),
            Self::Trim => write!(f, "Trim"),
            Self::Stop => write!(f, "Stop"),
            Self::ColorChange => write!(f, "ColorChange"),
            Self::NeedleSet => write!(f, "NeedleSet"),
            Self::End => write!(f, "End"),
            Self::Unknown(code) => write!(f, "Unknown({})", code),
        }
    }
}

/// One raw record from the decoder, in decoder units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StitchEvent {
    pub x: f64,
    pub y: f64,
    pub command: StitchCommand,
}

impl StitchEvent {
    pub fn new(x: f64, y: f64, command: StitchCommand) -> Self {
        Self { x, y, command }
    }

    pub fn stitch(x: f64, y: f64) -> Self {
        Self::new(x, y, StitchCommand::Stitch)
    }

    pub fn jump(x: f64, y: f64) -> Self {
        Self::new(x, y, StitchCommand::Jump)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes_round_trip() {
        for code in [STITCH, JUMP, TRIM, STOP, END, COLOR_CHANGE, NEEDLE_SET] {
            let command = StitchCommand::from_code(code);
            assert!(!matches!(command, StitchCommand::Unknown(_)));
            assert_eq!(command.code(), code);
        }
    }

    #[test]
    fn test_unrecognized_codes_are_unknown() {
        assert_eq!(StitchCommand::from_code(7), StitchCommand::Unknown(7));
        assert_eq!(
            StitchCommand::from_code(NO_COMMAND),
            StitchCommand::Unknown(-1)
        );
        assert_eq!(StitchCommand::Unknown(42).code(), 42);
    }

    #[test]
    fn test_boundary_rules() {
        use StitchCommand::*;
        // (command, closes with wires, closes without, keeps point with wires, keeps without)
        let table = [
            (Stitch, false, false, true, true),
            (Jump, false, true, true, false),
            (Trim, true, true, false, false),
            (Stop, true, true, true, true),
            (End, true, true, false, false),
            (ColorChange, true, true, false, false),
            (NeedleSet, true, true, true, true),
            (Unknown(-1), true, true, true, true),
        ];
        for (command, closes_shown, closes_hidden, keeps_shown, keeps_hidden) in table {
            assert_eq!(command.closes_section(true), closes_shown, "{command}");
            assert_eq!(command.closes_section(false), closes_hidden, "{command}");
            assert_eq!(command.keeps_point(true), keeps_shown, "{command}");
            assert_eq!(command.keeps_point(false), keeps_hidden, "{command}");
        }
    }

    #[test]
    fn test_event_deserializes_integer_command() {
        let event: StitchEvent =
            serde_json::from_str(r#"{"x": 10.0, "y": -5.0, "command": 5}"#).unwrap();
        assert_eq!(event.command, StitchCommand::ColorChange);

        let event: StitchEvent =
            serde_json::from_str(r#"{"x": 0.0, "y": 0.0, "command": 13}"#).unwrap();
        assert_eq!(event.command, StitchCommand::Unknown(13));

        let json = serde_json::to_string(&StitchEvent::jump(1.0, 2.0)).unwrap();
        assert_eq!(json, r#"{"x":1.0,"y":2.0,"command":1}"#);
    }

    #[test]
    fn test_display() {
        assert_eq!(StitchCommand::ColorChange.to_string(), "ColorChange");
        assert_eq!(StitchCommand::Unknown(-1).to_string(), "Unknown(-1)");
    }
}
