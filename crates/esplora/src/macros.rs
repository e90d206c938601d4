//! Metric macros that compile to nothing unless the `metrics` feature is enabled.

/// Starts, stops or discards a histogram timer with a label value.
#[macro_export]
macro_rules! timer {
    (START, $metric:ident, $labels:expr, $timer:ident) => {
        #[cfg(feature = "metrics")]
        let $timer = $crate::metrics::$metric.with_label_values($labels).start_timer();
    };
    (DISCARD, $timer:ident) => {
        #[cfg(feature = "metrics")]
        $timer.stop_and_discard();
    };
    (STOP, $timer:ident) => {
        #[cfg(feature = "metrics")]
        $timer.stop_and_record();
    };
}

/// Increments a counter with a label value.
#[macro_export]
macro_rules! inc {
    ($metric:ident, $labels:expr) => {
        #[cfg(feature = "metrics")]
        $crate::metrics::$metric.with_label_values($labels).inc();
    };
}
