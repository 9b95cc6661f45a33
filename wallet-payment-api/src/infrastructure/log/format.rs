use std::path::PathBuf;

use chrono::Local;
use tracing_subscriber::{
    fmt::{format::Writer, FmtContext, FormatEvent, FormatFields},
    registry::LookupSpan,
};

const LOG_FILE_NAME: &str = "log.txt";

/// Directory the rotating log files live in.
#[derive(Clone, Debug)]
pub struct LogBasePath(pub PathBuf);

impl LogBasePath {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self(dir.into())
    }

    pub fn log_path(&self) -> PathBuf {
        self.0.join(LOG_FILE_NAME)
    }
}

/// `<time> [<LEVEL>] <app_code>/<sn> <target>{<span>:<span>}: <fields>`
pub struct CustomEventFormat {
    app_code: String,
    sn: String,
}

impl CustomEventFormat {
    pub fn new(app_code: String, sn: String) -> Self {
        Self { app_code, sn }
    }
}

impl<S, N> FormatEvent<S, N> for CustomEventFormat
where
    S: tracing::Subscriber + for<'lookup> LookupSpan<'lookup>,
    N: for<'writer> FormatFields<'writer> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        write!(
            writer,
            "{} [{}] {}/{} {}",
            Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            meta.level(),
            self.app_code,
            self.sn,
            meta.target(),
        )?;

        if let Some(scope) = ctx.event_scope() {
            let names: Vec<&str> = scope.from_root().map(|span| span.name()).collect();
            write!(writer, "{{{}}}", names.join(":"))?;
        }
        write!(writer, ": ")?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}
