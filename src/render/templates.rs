//! Per-entity templates. Every interpolated value goes through `escape`.

use super::html::{escape, Html};
use crate::models::{Appointment, Doctor, PatientRecord};
use crate::widgets::format_date;

/// Placeholder for a record field the backend left empty
const EMPTY_CELL: &str = "—";

const NAV_LINKS: &[(&str, &str)] = &[
    ("/index.html", "Home"),
    ("/pages/patientDashboard.html", "Patient"),
    ("/templates/doctor/doctorDashboard.html", "Doctor"),
    ("/templates/admin/adminDashboard.html", "Admin"),
];

pub fn doctor_card(doctor: &Doctor) -> Html {
    Html::trusted(format!(
        r#"<div class="card"><h3>Dr. {}</h3><p>Specialization: {}</p><p>Experience: {} years</p></div>"#,
        escape(&doctor.name),
        escape(&doctor.specialization),
        doctor.experience,
    ))
}

pub fn appointment_row(appointment: &Appointment) -> Html {
    Html::trusted(format!(
        "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
        escape(&appointment.id.to_string()),
        escape(&appointment.patient_id.to_string()),
        escape(&format_date(&appointment.date)),
        escape(&appointment.status),
    ))
}

pub fn patient_record_row(record: &PatientRecord) -> Html {
    let date = record
        .date
        .as_deref()
        .map(format_date)
        .unwrap_or_else(|| EMPTY_CELL.to_string());

    Html::trusted(format!(
        "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
        escape(&record.id.to_string()),
        escape(&date),
        escape(record.diagnosis.as_deref().unwrap_or(EMPTY_CELL)),
        escape(record.notes.as_deref().unwrap_or(EMPTY_CELL)),
    ))
}

/// Site-wide navigation header
pub fn site_header() -> Html {
    let links: String = NAV_LINKS
        .iter()
        .map(|(href, label)| format!(r#"<li><a href="{}">{}</a></li>"#, escape(href), escape(label)))
        .collect();

    Html::trusted(format!(
        r#"<header class="site-header"><div class="container flex-between"><img src="/assets/images/logo/logo.png" alt="Logo" class="logo-sm"><nav><ul class="nav">{}</ul></nav></div></header>"#,
        links
    ))
}

/// Modal dialog content with its close control
pub fn modal_body(message: &str, close_class: &str) -> Html {
    Html::trusted(format!(
        r#"<div class="modal"><p>{}</p><button type="button" class="{}">Close</button></div>"#,
        escape(message),
        escape(close_class),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecordId;

    fn doctor(name: &str) -> Doctor {
        Doctor {
            id: None,
            name: name.to_string(),
            specialization: "Cardiology".to_string(),
            experience: 12,
            email: None,
            phone: None,
            available_times: Vec::new(),
        }
    }

    #[test]
    fn test_doctor_card() {
        let html = doctor_card(&doctor("Ada Smith"));
        assert_eq!(
            html.as_str(),
            r#"<div class="card"><h3>Dr. Ada Smith</h3><p>Specialization: Cardiology</p><p>Experience: 12 years</p></div>"#
        );
    }

    #[test]
    fn test_doctor_card_escapes_fields() {
        let html = doctor_card(&doctor("<script>alert('x')</script>"));
        assert!(!html.as_str().contains("<script>"));
        assert!(html
            .as_str()
            .contains("Dr. &lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
    }

    #[test]
    fn test_appointment_row_formats_date() {
        let appointment = Appointment {
            id: RecordId::Number(7),
            patient_id: RecordId::Number(1),
            date: "2024-01-01".to_string(),
            status: "Confirmed".to_string(),
        };

        assert_eq!(
            appointment_row(&appointment).as_str(),
            "<tr><td>7</td><td>1</td><td>1/1/2024</td><td>Confirmed</td></tr>"
        );
    }

    #[test]
    fn test_patient_record_row_fills_empty_cells() {
        let record = PatientRecord {
            id: RecordId::Number(3),
            patient_id: RecordId::Number(1),
            date: None,
            diagnosis: Some("Flu & fever".to_string()),
            notes: None,
        };

        assert_eq!(
            patient_record_row(&record).as_str(),
            "<tr><td>3</td><td>—</td><td>Flu &amp; fever</td><td>—</td></tr>"
        );
    }

    #[test]
    fn test_site_header_links() {
        let html = site_header();
        assert!(html.as_str().starts_with(r#"<header class="site-header">"#));
        assert_eq!(html.as_str().matches("<li>").count(), NAV_LINKS.len());
        assert!(html
            .as_str()
            .contains(r#"<a href="/templates/doctor/doctorDashboard.html">Doctor</a>"#));
    }

    #[test]
    fn test_modal_body_escapes_message() {
        let html = modal_body("Saved <b>now</b>", "modal-close");
        assert!(html.as_str().contains("<p>Saved &lt;b&gt;now&lt;/b&gt;</p>"));
        assert!(html.as_str().contains(r#"class="modal-close""#));
    }
}
