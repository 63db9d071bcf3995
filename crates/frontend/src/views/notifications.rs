//! Per-user notification feed with mark-as-read.

use contracts::domain::Notification;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

use crate::shared::components::EmptyState;
use crate::shared::data::client;
use crate::shared::date_utils;
use crate::shared::icons::icon;
use crate::system::auth::context;

/// Flip `is_read` on the matching record and nothing else. Called only
/// after the backend confirmed the write.
fn mark_read_local(items: &mut [Notification], id: Uuid) {
    if let Some(item) = items.iter_mut().find(|n| n.id == id) {
        item.is_read = true;
    }
}

#[component]
pub fn NotificationsPage() -> impl IntoView {
    let (auth_state, _) = context::use_auth();
    let (items, set_items) = signal(Option::<Vec<Notification>>::None);

    let user_id = auth_state
        .get_untracked()
        .session
        .as_ref()
        .map(|s| s.user.id);

    if let Some(user_id) = user_id {
        spawn_local(async move {
            match client::table("notifications")
                .eq("user_id", &user_id.to_string())
                .order_by("created_at", false)
                .fetch::<Notification>()
                .await
            {
                Ok(rows) => set_items.set(Some(rows)),
                Err(err) => {
                    log::error!("Failed to load notifications: {}", err);
                    set_items.set(Some(Vec::new()));
                }
            }
        });
    } else {
        set_items.set(Some(Vec::new()));
    }

    // Local state is patched only after the backend confirmed the write,
    // so a failed request leaves the item visibly unread.
    let mark_read = move |id: Uuid| {
        spawn_local(async move {
            let patch = serde_json::json!({ "is_read": true });
            match client::update_by_id("notifications", id, &patch).await {
                Ok(()) => {
                    set_items.update(|items| {
                        if let Some(items) = items {
                            mark_read_local(items, id);
                        }
                    });
                }
                Err(err) => log::error!("Failed to mark notification as read: {}", err),
            }
        });
    };

    let unread_count = Signal::derive(move || {
        items
            .get()
            .map(|rows| rows.iter().filter(|n| !n.is_read).count())
            .unwrap_or(0)
    });

    view! {
        <div class="page">
            <header class="page__header">
                <h1>"Notifications"</h1>
                <p>{move || format!("{} unread", unread_count.get())}</p>
            </header>

            {move || match items.get() {
                None => view! { <p class="muted">"Loading notifications..."</p> }.into_any(),
                Some(rows) if rows.is_empty() => view! {
                    <EmptyState
                        icon_name="bell"
                        title="No notifications"
                        hint="You're all caught up"
                    />
                }
                .into_any(),
                Some(rows) => view! {
                    <div class="card-list">
                        {rows
                            .into_iter()
                            .map(|n| {
                                let id = n.id;
                                let is_read = n.is_read;
                                let class = if n.is_read {
                                    "notification-card"
                                } else {
                                    "notification-card notification-card--unread"
                                };
                                view! {
                                    <div class=class>
                                        <div class="notification-card__icon">
                                            {icon(n.kind.icon_name())}
                                        </div>
                                        <div class="notification-card__body">
                                            <strong>{n.title.clone()}</strong>
                                            <p>{n.message.clone()}</p>
                                            <span class="notification-card__time">
                                                {date_utils::format_datetime(&n.created_at)}
                                            </span>
                                        </div>
                                        <Show when=move || !is_read>
                                            <button
                                                class="notification-card__action"
                                                on:click=move |_| mark_read(id)
                                            >
                                                "Mark as read"
                                            </button>
                                        </Show>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::NotificationKind;

    fn notification(id: Uuid, is_read: bool) -> Notification {
        Notification {
            id,
            user_id: Uuid::nil(),
            kind: NotificationKind::General,
            title: "Shift update".to_string(),
            message: "Route 12 reassigned".to_string(),
            is_read,
            related_entity_type: None,
            related_entity_id: None,
            created_at: "2024-01-01T08:00:00Z".to_string(),
        }
    }

    #[test]
    fn marks_only_the_target_record() {
        let target = Uuid::from_u128(1);
        let other = Uuid::from_u128(2);
        let mut items = vec![notification(other, false), notification(target, false)];

        mark_read_local(&mut items, target);

        assert!(items[1].is_read);
        assert!(!items[0].is_read);
    }

    #[test]
    fn unknown_id_changes_nothing() {
        let mut items = vec![notification(Uuid::from_u128(1), false)];

        mark_read_local(&mut items, Uuid::from_u128(9));

        assert!(!items[0].is_read);
    }

    #[test]
    fn already_read_record_stays_read() {
        let target = Uuid::from_u128(1);
        let mut items = vec![notification(target, true)];

        mark_read_local(&mut items, target);

        assert!(items[0].is_read);
    }
}
