use std::io::Write;

use color_print::cformat;

use crate::dbobjects::student::{ResultStatus, StudentRecord};

/// Shortest round-trip text, always with a fractional part (`40.0`).
pub fn format_average(average: f64) -> String {
    format!("{:?}", average)
}

pub fn paint_status(status: ResultStatus, color: bool) -> String {
    match (status, color) {
        (ResultStatus::Pass, true) => cformat!("<green>{}</green>", status),
        (ResultStatus::Fail, true) => cformat!("<red>{}</red>", status),
        (_, false) => status.to_string(),
    }
}

pub fn paint_error(message: &str, color: bool) -> String {
    if color {
        cformat!("<red>{}</red>", message)
    } else {
        message.to_string()
    }
}

pub fn write_record<W: Write>(out: &mut W, record: &StudentRecord, color: bool) -> std::io::Result<()> {
    writeln!(out, "Roll Number: {}", record.roll_number)?;
    writeln!(out, "Student Name: {}", record.name)?;
    write!(out, "Marks: ")?;
    for mark in record.marks().as_slice() {
        write!(out, "{} ", mark)?;
    }
    writeln!(out)?;
    writeln!(out, "Average: {}", format_average(record.average()))?;
    writeln!(out, "Result: {}", paint_status(record.status(), color))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn averages_keep_fraction() {
        assert_eq!(format_average(40.0), "40.0");
        assert_eq!(format_average(72.33333333333333), "72.33333333333333");
        assert_eq!(format_average(100.0), "100.0");
    }

    #[test]
    fn record_block() {
        let record = StudentRecord::new(1, "Asha".to_string(), [90, 85, 42]).unwrap();
        let mut out = Vec::new();
        write_record(&mut out, &record, false).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Roll Number: 1\nStudent Name: Asha\nMarks: 90 85 42 \nAverage: 72.33333333333333\nResult: Pass\n"
        );
    }

    #[test]
    fn colored_status_wraps_plain_text() {
        let painted = paint_status(ResultStatus::Fail, true);
        assert!(painted.contains("Fail"));
        assert_ne!(painted, "Fail");
        assert_eq!(paint_status(ResultStatus::Fail, false), "Fail");
    }
}
