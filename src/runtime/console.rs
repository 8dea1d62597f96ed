use super::*;
use crate::playback::Readout;
use crate::session::Update;
use colored::Colorize;
use std::io::Write;
use tokio::sync::mpsc::UnboundedReceiver;

/// Terminal side of the explorer: reads control lines from stdin and
/// prints session updates.
pub struct Console;

impl Console {
    /// Reads stdin on a dedicated thread. Unparseable lines are reported
    /// immediately and never reach the receiver, which closes at EOF.
    pub fn listen() -> UnboundedReceiver<Input> {
        let channel = Channel::default();
        let tx = channel.sender();
        std::thread::spawn(move || {
            loop {
                let ref mut buffer = String::new();
                match std::io::stdin().read_line(buffer) {
                    Ok(0) | Err(_) => break,
                    Ok(_) if buffer.trim().is_empty() => continue,
                    Ok(_) => match Input::parse(buffer) {
                        Ok(input) => {
                            if tx.send(input).is_err() {
                                break;
                            }
                        }
                        Err(e) => eprintln!("{}", e),
                    },
                }
            }
            log::debug!("[console] stdin closed");
        });
        channel.into_rx()
    }

    pub fn prompt() {
        print!("> ");
        let _ = std::io::stdout().flush();
    }

    /// Prints an update. Landings are only logged.
    pub fn show(update: &Update) {
        match update {
            Update::Landed { .. } => log::debug!("[console] {}", update),
            Update::Readout(readout) => println!("{}", Self::readout(readout)),
            Update::Failed { .. } => println!("{}", update.to_string().red()),
            Update::State(_) | Update::Speed(_) => println!("{}", update.to_string().cyan()),
            Update::Finished(_) => println!("{}", update.to_string().green().bold()),
            Update::Notice(_) | Update::Fit(_) | Update::Reset => println!("{}", update.to_string().dimmed()),
            Update::Inspect(_) => println!("{}", update),
        }
    }

    fn readout(readout: &Readout) -> String {
        readout.line(|error| match readout.error() {
            Some(e) if e > 0.0 => error.red(),
            Some(e) if e < 0.0 => error.blue(),
            Some(_) => error.green(),
            None => error.normal(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_readout_matches_display() {
        colored::control::set_override(false);
        let readout = Readout {
            index: 3,
            total: 4,
            truth: Some(2.0),
            predicted: Some(1.0),
        };
        assert_eq!(Console::readout(&readout), readout.to_string());
        assert_eq!(Console::readout(&Readout::idle(4)), Readout::idle(4).to_string());
    }
}
