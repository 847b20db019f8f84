// src/controllers/osc.rs
// OSC Controller
//
// Lets a remote surface (TouchOSC, a show controller, a script) drive the
// scenes. Messages are decoded into commands and queued until the next frame.

use nannou_osc as osc;
use std::error::Error;
use tracing::warn;

#[derive(Debug, Clone, PartialEq)]
pub enum OscCommand {
    SelectScene {
        name: String,
    },
    ConverterStart {
        value: f32,
    },
    ConverterLimit {
        limit: Option<usize>,
    },
    ConverterSkip,
    ArraySwap {
        a: usize,
        b: usize,
    },
    ArrayStep,
    ArrayMarkers {
        show: bool,
    },
    ArrayReset,
}

impl OscCommand {
    /// Decodes one message. `None` for unknown addresses or mismatched arguments.
    pub fn parse(addr: &str, args: &[osc::Type]) -> Option<OscCommand> {
        let command = match addr {
            "/scene/select" => match args {
                [osc::Type::String(name)] => OscCommand::SelectScene { name: name.clone() },
                _ => return None,
            },
            "/converter/start" => match args {
                [osc::Type::Float(value)] => OscCommand::ConverterStart { value: *value },
                _ => return None,
            },
            "/converter/limit" => match args {
                [osc::Type::Int(limit)] => OscCommand::ConverterLimit {
                    limit: (*limit > 0).then_some(*limit as usize),
                },
                _ => return None,
            },
            "/converter/skip" => OscCommand::ConverterSkip,
            "/array/swap" => match args {
                [osc::Type::Int(a), osc::Type::Int(b)] if *a >= 0 && *b >= 0 => {
                    OscCommand::ArraySwap {
                        a: *a as usize,
                        b: *b as usize,
                    }
                }
                _ => return None,
            },
            "/array/step" => OscCommand::ArrayStep,
            "/array/markers" => match args {
                [osc::Type::Int(setting)] => OscCommand::ArrayMarkers {
                    show: *setting != 0,
                },
                _ => return None,
            },
            "/array/reset" => OscCommand::ArrayReset,
            _ => return None,
        };
        Some(command)
    }
}

pub struct OscController {
    command_queue: Vec<OscCommand>,
    receiver: osc::Receiver,
}

impl OscController {
    pub fn new(port: u16) -> Result<Self, Box<dyn Error>> {
        let receiver = osc::receiver(port)?;

        Ok(Self {
            command_queue: Vec::new(),
            receiver,
        })
    }

    pub fn process_messages(&mut self) {
        for (packet, _addr) in self.receiver.try_iter() {
            for message in packet.into_msgs() {
                let args = &message.args[..];
                match OscCommand::parse(&message.addr, args) {
                    Some(command) => self.command_queue.push(command),
                    None => warn!(addr = %message.addr, ?args, "ignoring OSC message"),
                }
            }
        }
    }

    pub fn take_commands(&mut self) -> Vec<OscCommand> {
        std::mem::take(&mut self.command_queue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_addresses() {
        assert_eq!(
            OscCommand::parse("/array/swap", &[osc::Type::Int(0), osc::Type::Int(2)]),
            Some(OscCommand::ArraySwap { a: 0, b: 2 })
        );
        assert_eq!(
            OscCommand::parse("/converter/start", &[osc::Type::Float(0.625)]),
            Some(OscCommand::ConverterStart { value: 0.625 })
        );
        assert_eq!(
            OscCommand::parse("/converter/limit", &[osc::Type::Int(0)]),
            Some(OscCommand::ConverterLimit { limit: None })
        );
        assert_eq!(
            OscCommand::parse("/array/markers", &[osc::Type::Int(1)]),
            Some(OscCommand::ArrayMarkers { show: true })
        );
        assert_eq!(
            OscCommand::parse("/scene/select", &[osc::Type::String("array".into())]),
            Some(OscCommand::SelectScene {
                name: "array".into()
            })
        );
    }

    #[test]
    fn test_parse_rejects_bad_messages() {
        assert_eq!(OscCommand::parse("/grid/move", &[]), None);
        assert_eq!(
            OscCommand::parse("/array/swap", &[osc::Type::Int(-1), osc::Type::Int(2)]),
            None
        );
        assert_eq!(
            OscCommand::parse("/converter/start", &[osc::Type::Int(1)]),
            None
        );
    }
}
