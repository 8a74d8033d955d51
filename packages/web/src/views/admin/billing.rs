use std::collections::{BTreeSet, HashMap};

use dioxus::prelude::*;

use api::models::{Payment, StudentSummary};
use store::Role;
use ui::{
    client_for, handle_api_error, push_toast, use_session, use_toasts, LoadingSpinner, ToastLevel,
};

/// Billing management: the school-fee figure (view and edit) and every
/// student's payment history, searchable and filterable, with pending
/// payments surfaced first for an approve/reject verdict.
#[component]
pub fn AdminBilling() -> Element {
    let mut session = use_session();
    let mut toasts = use_toasts();

    let mut editing_fee = use_signal(|| false);
    let mut fee_draft = use_signal(String::new);
    let mut search = use_signal(String::new);
    let mut semester_filter = use_signal(String::new);
    let mut department_filter = use_signal(String::new);
    let mut expanded = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    let students = use_resource(move || async move {
        let client = client_for(&session.read(), Role::Admin)?;
        Some(client.list_students(Role::Admin).await)
    });

    let mut fee = use_resource(move || async move {
        let client = client_for(&session.read(), Role::Admin)?;
        Some(client.school_fee().await)
    });

    let roster: Vec<StudentSummary> = match &*students.read() {
        Some(Some(Ok(list))) => list.clone(),
        _ => Vec::new(),
    };

    // One history fetch per student; a student whose fetch fails simply has
    // no rows rather than poisoning the whole ledger.
    let ids: Vec<String> = roster.iter().map(|s| s.id.clone()).collect();
    let mut ledger = use_resource(use_reactive!(|ids| async move {
        let client = client_for(&session.read(), Role::Admin)?;
        let mut by_student = HashMap::<String, Vec<Payment>>::new();
        for id in ids {
            if let Ok(payments) = client.student_payments(&id).await {
                by_student.insert(id, payments);
            }
        }
        Some(by_student)
    }));

    let payments_by_student = match &*ledger.read() {
        Some(Some(map)) => map.clone(),
        _ => HashMap::new(),
    };

    let fee_amount = match &*fee.read() {
        Some(Some(Ok(config))) => config.amount,
        _ => None,
    };

    let semesters: BTreeSet<String> = roster
        .iter()
        .filter_map(|s| s.semester.clone())
        .collect();
    let departments: BTreeSet<String> = roster
        .iter()
        .filter_map(|s| s.department.clone())
        .collect();

    let mut rows: Vec<&StudentSummary> = roster
        .iter()
        .filter(|s| {
            matches_filters(s, &search.read(), &semester_filter.read(), &department_filter.read())
                && payments_by_student.contains_key(&s.id)
        })
        .collect();
    rows.sort_by_key(|s| {
        let pending = payments_by_student
            .get(&s.id)
            .is_some_and(|p| p.iter().any(Payment::is_pending));
        !pending
    });

    let save_fee = move |_| {
        if busy() {
            return;
        }
        let Ok(amount) = fee_draft.read().trim().parse::<f64>() else {
            push_toast(&mut toasts, ToastLevel::Error, "Enter a numeric fee");
            return;
        };
        busy.set(true);
        spawn(async move {
            let Some(client) = client_for(&session.read(), Role::Admin) else {
                busy.set(false);
                return;
            };
            match client.update_school_fee(amount).await {
                Ok(()) => {
                    push_toast(&mut toasts, ToastLevel::Success, "School fee updated");
                    editing_fee.set(false);
                    fee.restart();
                }
                Err(err) => handle_api_error(&mut session, &mut toasts, Role::Admin, &err),
            }
            busy.set(false);
        });
    };

    let mut settle = move |payment_id: String, verdict: &'static str| {
        if busy() {
            return;
        }
        busy.set(true);
        spawn(async move {
            let Some(client) = client_for(&session.read(), Role::Admin) else {
                busy.set(false);
                return;
            };
            match client.settle_payment(&payment_id, verdict).await {
                Ok(()) => {
                    push_toast(&mut toasts, ToastLevel::Success, &format!("Payment {verdict}"));
                    ledger.restart();
                }
                Err(err) => handle_api_error(&mut session, &mut toasts, Role::Admin, &err),
            }
            busy.set(false);
        });
    };

    rsx! {
        div {
            class: "section",
            h2 { "Billing Management" }

            div {
                class: "fee-box",
                strong { "School Fee: " }
                if editing_fee() {
                    input {
                        class: "score-input",
                        inputmode: "decimal",
                        value: fee_draft(),
                        oninput: move |evt| fee_draft.set(evt.value()),
                    }
                    button {
                        class: "btn btn-primary btn-small",
                        disabled: busy(),
                        onclick: save_fee,
                        "Save"
                    }
                } else {
                    span { {fee_amount.map(fmt_naira).unwrap_or_else(|| "-".into())} }
                    button {
                        class: "btn btn-secondary btn-small",
                        onclick: move |_| {
                            fee_draft.set(fee_amount.map(|a| format!("{a}")).unwrap_or_default());
                            editing_fee.set(true);
                        },
                        "Edit"
                    }
                }
            }

            div {
                class: "filter-bar",
                input {
                    placeholder: "Search by name or matric",
                    value: search(),
                    oninput: move |evt| search.set(evt.value()),
                }
                select {
                    value: semester_filter(),
                    onchange: move |evt| semester_filter.set(evt.value()),
                    option { value: "", "All Semesters" }
                    for semester in semesters.iter() {
                        option { key: "{semester}", value: "{semester}", "{semester}" }
                    }
                }
                select {
                    value: department_filter(),
                    onchange: move |evt| department_filter.set(evt.value()),
                    option { value: "", "All Departments" }
                    for department in departments.iter() {
                        option { key: "{department}", value: "{department}", "{department}" }
                    }
                }
            }

            match (&*students.read(), &*ledger.read()) {
                (None, _) | (_, None) => rsx! { LoadingSpinner {} },
                (Some(Some(Err(err))), _) => rsx! { p { class: "section-error", "{err}" } },
                _ => {
                    if rows.is_empty() {
                        rsx! { p { class: "section-empty", "No payment records match." } }
                    } else {
                        rsx! {
                            table {
                                class: "data-table",
                                thead {
                                    tr {
                                        th { "Name" }
                                        th { "Matric" }
                                        th { "Department" }
                                        th { "Semester" }
                                        th { "Status" }
                                        th { "" }
                                    }
                                }
                                tbody {
                                    for student in rows.iter().cloned().cloned() {
                                        {
                                            let payments = payments_by_student
                                                .get(&student.id)
                                                .cloned()
                                                .unwrap_or_default();
                                            let pending = payments.iter().any(Payment::is_pending);
                                            let latest_pending =
                                                payments.iter().find(|p| p.is_pending()).and_then(|p| p.id.clone());
                                            let is_expanded = expanded.read().as_deref() == Some(student.id.as_str());
                                            let toggle_id = student.id.clone();
                                            rsx! {
                                                tr {
                                                    key: "{student.id}",
                                                    td { "{student.full_name()}" }
                                                    td { {student.student_id.as_deref().unwrap_or("-")} }
                                                    td { {student.department.as_deref().unwrap_or("-")} }
                                                    td { {student.semester.as_deref().unwrap_or("-")} }
                                                    td {
                                                        span {
                                                            class: if pending { "status status--pending" } else { "status status--paid" },
                                                            if pending { "Pending" } else { "Paid" }
                                                        }
                                                    }
                                                    td {
                                                        class: "row-actions",
                                                        if let Some(payment_id) = latest_pending {
                                                            {
                                                                let approve_id = payment_id.clone();
                                                                let reject_id = payment_id;
                                                                rsx! {
                                                                    button {
                                                                        class: "btn btn-secondary btn-small",
                                                                        disabled: busy(),
                                                                        onclick: move |_| settle(approve_id.clone(), "paid"),
                                                                        "Approve"
                                                                    }
                                                                    button {
                                                                        class: "btn btn-danger btn-small",
                                                                        disabled: busy(),
                                                                        onclick: move |_| settle(reject_id.clone(), "rejected"),
                                                                        "Reject"
                                                                    }
                                                                }
                                                            }
                                                        }
                                                        button {
                                                            class: "btn btn-secondary btn-small",
                                                            onclick: move |_| {
                                                                let open = expanded.read().as_deref() == Some(toggle_id.as_str());
                                                                expanded.set(if open { None } else { Some(toggle_id.clone()) });
                                                            },
                                                            if is_expanded { "Hide" } else { "View" }
                                                        }
                                                    }
                                                }
                                                if is_expanded {
                                                    for payment in payments.iter() {
                                                        tr {
                                                            class: "billing-sub-row",
                                                            td {
                                                                colspan: 6,
                                                                div {
                                                                    class: "billing-sub-content",
                                                                    span { strong { "Date: " } {payment.created_at.as_deref().unwrap_or("-")} }
                                                                    span { strong { "Amount: " } "{fmt_naira(payment.paid())}" }
                                                                    span { strong { "Status: " } {payment.status.as_deref().unwrap_or("-")} }
                                                                    span { strong { "Session: " } {payment.session.as_deref().unwrap_or("-")} }
                                                                    span { strong { "Level: " } {payment.level.as_deref().unwrap_or("-")} }
                                                                    span {
                                                                        strong { "Receipt: " }
                                                                        if let Some(url) = payment.receipt_url.as_ref() {
                                                                            a { href: "{url}", target: "_blank", "View" }
                                                                        } else {
                                                                            "N/A"
                                                                        }
                                                                    }
                                                                }
                                                            }
                                                        }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Name-or-matric search plus exact semester/department filters; an empty
/// filter matches everything.
fn matches_filters(student: &StudentSummary, query: &str, semester: &str, department: &str) -> bool {
    let needle = query.trim().to_lowercase();
    let by_text = needle.is_empty()
        || student.full_name().to_lowercase().contains(&needle)
        || student
            .student_id
            .as_deref()
            .map(|m| m.to_lowercase().contains(&needle))
            .unwrap_or(false);
    by_text
        && (semester.is_empty() || student.semester.as_deref() == Some(semester))
        && (department.is_empty() || student.department.as_deref() == Some(department))
}

/// `₦` figure with thousands separators, whole naira only.
fn fmt_naira(amount: f64) -> String {
    let whole = amount.trunc() as i64;
    let digits = whole.abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if whole < 0 {
        format!("-\u{20a6}{grouped}")
    } else {
        format!("\u{20a6}{grouped}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(name: (&str, &str), matric: &str, semester: &str, department: &str) -> StudentSummary {
        serde_json::from_str(&format!(
            r#"{{
                "_id": "s-{matric}",
                "firstname": "{}",
                "lastname": "{}",
                "studentId": "{matric}",
                "semester": "{semester}",
                "department": "{department}"
            }}"#,
            name.0, name.1
        ))
        .unwrap()
    }

    #[test]
    fn search_matches_name_or_matric_case_insensitively() {
        let ada = student(("Ada", "Okafor"), "CSC/21/014", "First Semester", "Computer Engineering");
        assert!(matches_filters(&ada, "ada", "", ""));
        assert!(matches_filters(&ada, "csc/21", "", ""));
        assert!(!matches_filters(&ada, "bola", "", ""));
    }

    #[test]
    fn semester_and_department_filters_are_exact() {
        let ada = student(("Ada", "Okafor"), "CSC/21/014", "First Semester", "Computer Engineering");
        assert!(matches_filters(&ada, "", "First Semester", ""));
        assert!(!matches_filters(&ada, "", "Second Semester", ""));
        assert!(matches_filters(&ada, "", "First Semester", "Computer Engineering"));
        assert!(!matches_filters(&ada, "", "", "Civil Engineering"));
    }

    #[test]
    fn empty_filters_match_everything() {
        let ada = student(("Ada", "Okafor"), "CSC/21/014", "First Semester", "Computer Engineering");
        assert!(matches_filters(&ada, "", "", ""));
    }

    #[test]
    fn naira_amounts_group_thousands() {
        assert_eq!(fmt_naira(150000.0), "\u{20a6}150,000");
        assert_eq!(fmt_naira(999.0), "\u{20a6}999");
        assert_eq!(fmt_naira(1_234_567.89), "\u{20a6}1,234,567");
        assert_eq!(fmt_naira(0.0), "\u{20a6}0");
    }
}
