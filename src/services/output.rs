use crate::domain::constants::{CODE_INPUT_INVALID, CODE_INTERNAL};
use crate::domain::models::{ErrorBody, JsonErr, JsonOut};
use crate::services::input::InputError;
use serde::Serialize;
use std::io::{self, Write};

/// Writes one `message` row per report, or the whole slice as a `JsonOut` envelope.
pub fn write_reports<W: Write, T: Serialize>(
    out: &mut W,
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        let body = serde_json::to_string_pretty(&JsonOut { ok: true, data })?;
        writeln!(out, "{}", body)?;
    } else {
        for d in data {
            writeln!(out, "{}", row(d))?;
        }
    }
    out.flush()?;
    Ok(())
}

pub fn write_report<W: Write, T: Serialize>(
    out: &mut W,
    json: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        let body = serde_json::to_string_pretty(&JsonOut { ok: true, data })?;
        writeln!(out, "{}", body)?;
    } else {
        writeln!(out, "{}", row(&data))?;
    }
    out.flush()?;
    Ok(())
}

pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    write_reports(&mut io::stdout().lock(), json, data, row)
}

pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    write_report(&mut io::stdout().lock(), json, data, row)
}

/// True when the reader of stdout went away, e.g. `agecheck demo | head -1`.
pub fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<io::Error>()
            .map(|e| e.kind() == io::ErrorKind::BrokenPipe)
            .unwrap_or(false)
    })
}

pub fn error_code(err: &anyhow::Error) -> &'static str {
    if err.downcast_ref::<InputError>().is_some() {
        CODE_INPUT_INVALID
    } else {
        CODE_INTERNAL
    }
}

pub fn error_envelope(err: &anyhow::Error) -> JsonErr {
    JsonErr {
        ok: false,
        error: ErrorBody {
            code: error_code(err).to_string(),
            message: err.to_string(),
        },
    }
}

/// JSON mode puts the envelope on `out`; if that write fails the plain message
/// still reaches `diag`.
pub fn write_error<W: Write, D: Write>(
    out: &mut W,
    diag: &mut D,
    json: bool,
    err: &anyhow::Error,
) -> io::Result<()> {
    if json {
        let written = serde_json::to_string_pretty(&error_envelope(err))
            .map_err(io::Error::from)
            .and_then(|body| writeln!(out, "{}", body))
            .and_then(|()| out.flush());
        if written.is_ok() {
            return Ok(());
        }
    }
    writeln!(diag, "error: {}", err)
}

pub fn print_error(json: bool, err: &anyhow::Error) {
    let _ = write_error(&mut io::stdout().lock(), &mut io::stderr().lock(), json, err);
}
