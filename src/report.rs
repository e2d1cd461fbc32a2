//! 將過境清單轉成終端機輸出：文字、JSON 或 CSV。

use crate::domain::model::{PassList, PassWindow};
use crate::utils::error::Result;
use chrono::{DateTime, TimeZone, Utc};
use std::fmt::Display;

/// `Next pass at <time> for <duration> seconds!`
pub fn format_pass_line<Tz>(pass: &PassWindow, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match DateTime::<Utc>::from_timestamp(pass.risetime, 0) {
        Some(rise) => format!(
            "Next pass at {} for {} seconds!",
            rise.with_timezone(tz).format("%a %b %d %Y %H:%M:%S %Z"),
            pass.duration
        ),
        None => format!(
            "Next pass at risetime {} for {} seconds!",
            pass.risetime, pass.duration
        ),
    }
}

pub fn render_text<Tz>(passes: &PassList, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if passes.is_empty() {
        return "No upcoming passes reported.".to_string();
    }

    passes
        .iter()
        .map(|pass| format_pass_line(pass, tz))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_json(passes: &PassList) -> Result<String> {
    Ok(serde_json::to_string_pretty(passes)?)
}

pub fn render_csv(passes: &PassList) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["risetime", "duration", "rise_time_utc"])?;

    for pass in passes {
        let rise_utc = DateTime::<Utc>::from_timestamp(pass.risetime, 0)
            .map(|t| t.to_rfc3339())
            .unwrap_or_default();
        writer.write_record([
            pass.risetime.to_string(),
            pass.duration.to_string(),
            rise_utc,
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
