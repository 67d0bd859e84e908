//! Wall-clock timing around any [`Callable`].

use std::fmt;
use std::time::{Duration, Instant};

use clap::ValueEnum;
use log::info;

use crate::callable::Callable;

/// Unit in which elapsed times are reported.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, ValueEnum)]
pub enum TimeUnit {
    #[default]
    Nanoseconds,
    Microseconds,
    Milliseconds,
    Seconds,
}

impl TimeUnit {
    /// Whole units contained in `elapsed`, truncated.
    pub fn count(&self, elapsed: Duration) -> u128 {
        match self {
            TimeUnit::Nanoseconds => elapsed.as_nanos(),
            TimeUnit::Microseconds => elapsed.as_micros(),
            TimeUnit::Milliseconds => elapsed.as_millis(),
            TimeUnit::Seconds => elapsed.as_secs() as u128,
        }
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            TimeUnit::Nanoseconds => "ns",
            TimeUnit::Microseconds => "us",
            TimeUnit::Milliseconds => "ms",
            TimeUnit::Seconds => "s",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.suffix())
    }
}

/// Wraps a callable and reports how long each call took.
///
/// The wrapped result is returned untouched. If the wrapped callable
/// panics, nothing is recorded.
pub struct TimeIt<F> {
    function: F,
    unit: TimeUnit,
    label: String,
    last_elapsed: Option<Duration>,
}

impl<F> TimeIt<F> {
    pub fn new(function: F, unit: TimeUnit) -> Self {
        Self {
            function,
            unit,
            label: String::from("call"),
            last_elapsed: None,
        }
    }

    /// Name used in the elapsed-time log line.
    pub fn with_label(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }

    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    pub fn last_elapsed(&self) -> Option<Duration> {
        self.last_elapsed
    }

    /// Last elapsed time in the configured unit.
    pub fn last_count(&self) -> Option<u128> {
        self.last_elapsed.map(|d| self.unit.count(d))
    }

    pub fn into_inner(self) -> F {
        self.function
    }
}

impl<Args, F> Callable<Args> for TimeIt<F>
where
    F: Callable<Args>,
{
    type Output = F::Output;

    fn invoke(&mut self, args: Args) -> F::Output {
        let start = Instant::now();
        let result = self.function.invoke(args);
        let elapsed = start.elapsed();
        self.last_elapsed = Some(elapsed);
        info!(
            "{}: elapsed time {} {}",
            self.label,
            self.unit.count(elapsed),
            self.unit
        );
        result
    }
}

pub fn time_it<F>(function: F, unit: TimeUnit) -> TimeIt<F> {
    TimeIt::new(function, unit)
}
