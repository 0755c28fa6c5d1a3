use crate::residents::{QueueSummary, ResidencyStatus, ResidentId, ResidentView};
use crate::review::{Flash, LoadState, ReviewState, UpdateModal};
use crate::templates::components::{count_card, error_banner, flash_banners, modal, status_badge};
use crate::templates::desktop_layout;
use chrono::{DateTime, Utc};
use maud::{html, Markup};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

pub struct ReviewVm<'a> {
    pub state: &'a ReviewState,
    pub flashes: Vec<Flash>,
}

/// Base path of one resident's page actions.
pub fn resident_path(id: &ResidentId) -> String {
    format!("/admin/review/{}", utf8_percent_encode(id.as_str(), NON_ALPHANUMERIC))
}

fn format_ts(ts: Option<DateTime<Utc>>) -> String {
    match ts {
        Some(ts) => ts.format("%b %-d, %Y %H:%M").to_string(),
        None => "—".to_string(),
    }
}

fn display_name(resident: &ResidentView) -> &str {
    if resident.name.is_empty() {
        "(unnamed)"
    } else {
        &resident.name
    }
}

pub fn review_page(vm: &ReviewVm) -> Markup {
    let state = vm.state;
    let summary = QueueSummary::from_queue(&state.queue);

    desktop_layout(
        "Residents for Review",
        html! {
            main class="container" {
                h1 { "Residents for Review" }

                (flash_banners(&vm.flashes))

                @if let LoadState::Error(msg) = &state.load {
                    (error_banner(msg))
                }

                div class="summary" {
                    (count_card("In queue", summary.total))
                    (count_card("Pending verification", summary.pending_verification))
                    (count_card("Denied verification", summary.denied_verification))
                    (count_card("Flagged for review", summary.flagged_for_review))
                }

                div class="card" {
                    @if state.load == LoadState::Loading {
                        p { "Loading residents…" }
                    } @else if state.queue.is_empty() {
                        p style="color: #6b7280;" { "No residents need review." }
                    } @else {
                        (queue_table(&state.queue))
                    }
                }

                @if let Some(resident) = &state.details {
                    (details_modal(resident))
                }
                @if let Some(update) = &state.update {
                    (update_modal(update, state.submitting))
                }
            }
        },
    )
}

fn queue_table(queue: &[ResidentView]) -> Markup {
    html! {
        div style="overflow-x: auto;" {
            table style="width: 100%; border-collapse: collapse;" {
                thead {
                    tr {
                        th style="padding: 12px 8px; border-bottom: 2px solid #e5e7eb; text-align: left;" { "Name" }
                        th style="padding: 12px 8px; border-bottom: 2px solid #e5e7eb; text-align: left;" { "Email" }
                        th style="padding: 12px 8px; border-bottom: 2px solid #e5e7eb; text-align: left;" { "Residency" }
                        th style="padding: 12px 8px; border-bottom: 2px solid #e5e7eb; text-align: left;" { "Verification" }
                        th style="padding: 12px 8px; border-bottom: 2px solid #e5e7eb; text-align: left;" { "Last Activity" }
                        th style="padding: 12px 8px; border-bottom: 2px solid #e5e7eb; text-align: left;" { "Actions" }
                    }
                }
                tbody {
                    @for resident in queue {
                        tr {
                            td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (display_name(resident)) }
                            td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" { (resident.email) }
                            td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" {
                                (status_badge(&resident.residency_status.badge()))
                            }
                            td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" {
                                (resident.verification_status.as_deref().unwrap_or("—"))
                            }
                            td style="padding: 8px; border-bottom: 1px solid #f3f4f6; color: #6b7280; font-size: 0.9em;" {
                                (format_ts(resident.last_activity_at))
                            }
                            td style="padding: 8px; border-bottom: 1px solid #f3f4f6;" {
                                a href=(resident_path(&resident.id)) style="margin-right: 12px;" { "View" }
                                a href=(format!("{}/update", resident_path(&resident.id))) { "Update" }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn details_modal(resident: &ResidentView) -> Markup {
    modal(
        "details-modal",
        "Resident Details",
        "/admin/review/details/close",
        html! {
            dl {
                dt { "Name" } dd { (display_name(resident)) }
                dt { "Email" } dd { @if resident.email.is_empty() { "—" } @else { (resident.email) } }
                dt { "Residency status" } dd { (status_badge(&resident.residency_status.badge())) }
                dt { "Verification status" } dd { (resident.verification_status.as_deref().unwrap_or("—")) }
                dt { "Last activity" } dd { (format_ts(resident.last_activity_at)) }
                dt { "Status updated" } dd { (format_ts(resident.status_updated_at)) }
                dt { "Resident record" } dd {
                    @match &resident.resident_record_id {
                        Some(id) => (id.as_str()),
                        None => "—",
                    }
                }
                @if let Some(notes) = &resident.status_notes {
                    dt { "Notes" } dd { (notes) }
                }
            }
        },
    )
}

fn update_modal(update: &UpdateModal, submitting: bool) -> Markup {
    let target = &update.target;
    let draft = &update.draft;

    modal(
        "update-modal",
        "Update Residency Status",
        "/admin/review/update/close",
        html! {
            p { (display_name(target)) ", currently " (status_badge(&target.residency_status.badge())) }
            form action=(format!("{}/status", resident_path(&target.id))) method="post" style="display: flex; flex-direction: column; gap: 10px;" {
                label for="residency_status" { "New status" }
                select id="residency_status" name="residency_status" required style="padding: 8px; border-radius: 4px; border: 1px solid #ccc;" {
                    option value="" disabled selected[draft.residency_status.is_none()] { "Select status..." }
                    @for status in ResidencyStatus::ALL {
                        option value=(status.as_str()) selected[draft.residency_status == Some(status)] {
                            (status.badge().label)
                        }
                    }
                }
                label for="status_notes" { "Notes" }
                textarea id="status_notes" name="status_notes" rows="3" style="padding: 8px; border-radius: 4px; border: 1px solid #ccc;" {
                    (draft.status_notes)
                }
                button type="submit" disabled[submitting] style="padding: 8px 16px; background: #3b82f6; color: white; border: none; border-radius: 4px; cursor: pointer;" {
                    @if submitting { "Saving..." } @else { "Save" }
                }
            }
        },
    )
}
