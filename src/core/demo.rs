use crate::core::handler::{dispatch, Handler};
use crate::core::{Fault, OutputSink, Result, Roster};
use crate::utils::error::DemoError;

pub const START_MARKER: &str = "try Block:: Begin";
pub const COMPLETION_MARKER: &str = "rest of the code";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub elements_printed: usize,
    pub handled_by: Option<Handler>,
    pub fault: Option<Fault>,
}

pub struct DemoEngine<S: OutputSink> {
    sink: S,
}

impl<S: OutputSink> DemoEngine<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Runs the guarded walk, routes any fault to its handler, then writes
    /// the completion marker. Only sink failures are returned as errors.
    pub fn run(&mut self, roster: &Roster) -> Result<Outcome> {
        tracing::debug!("Walking roster of {} names", roster.len());

        let (printed, walk) = guarded_walk(roster, &mut self.sink)?;
        self.resolve(walk, printed)
    }

    /// Hands a fault to the first matching handler, then writes the
    /// completion marker whichever branch ran.
    fn resolve(
        &mut self,
        walk: std::result::Result<(), Fault>,
        printed: usize,
    ) -> Result<Outcome> {
        let outcome = match walk {
            Ok(()) => Outcome {
                elements_printed: printed,
                handled_by: None,
                fault: None,
            },
            Err(fault) => {
                let handler = dispatch(&fault);
                tracing::debug!("Fault '{}' handled by {:?}", fault, handler);
                self.sink.write_line(&handler.message(&fault))?;
                Outcome {
                    elements_printed: printed,
                    handled_by: Some(handler),
                    fault: Some(fault),
                }
            }
        };

        self.sink.write_line(COMPLETION_MARKER)?;
        Ok(outcome)
    }
}

/// The guarded block. Returns how many names were written along with the
/// fault raised by the walk; sink failures go through the outer `Result`.
fn guarded_walk<S: OutputSink>(
    roster: &Roster,
    sink: &mut S,
) -> std::result::Result<(usize, std::result::Result<(), Fault>), DemoError> {
    sink.write_line(START_MARKER)?;
    // Inclusive bound: the last pass reads one past the end.
    for index in 0..=roster.len() {
        let name = match roster.get(index) {
            Ok(name) => name,
            Err(fault) => return Ok((index, Err(fault))),
        };
        sink.write_line(name)?;
    }
    Ok((roster.len(), Ok(())))
}

/// Convenience wrapper for a one-shot run.
pub fn run<S: OutputSink>(roster: &Roster, sink: S) -> Result<(Outcome, S)> {
    let mut engine = DemoEngine::new(sink);
    let outcome = engine.run(roster)?;
    Ok((outcome, engine.into_sink()))
}
