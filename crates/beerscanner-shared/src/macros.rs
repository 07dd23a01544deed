/// For errors that can be expected now and then (e.g. a read only disk) and
/// are not worth stopping for. Takes the result and a message for the log.
#[macro_export]
macro_rules! log_err_as_warn {
    ($result: expr, $msg: literal) => {
        if let Err(mishap) = $result {
            tracing::warn!(?mishap, $msg);
        }
    };
}

/// Same as [`log_err_as_warn`] for errors that should never happen, execution
/// still goes on
#[macro_export]
macro_rules! log_err_as_error {
    ($result: expr, $msg: literal) => {
        if let Err(err) = $result {
            tracing::error!(?err, $msg);
        }
    };
}
