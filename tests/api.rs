mod helpers;

use calenduh_domain::{Group, GroupMember};
use calenduh_sdk::{
    CalenduhSDK, CreateCalendarInput, CreateEventInput, GetOccurrencesInput, LoginInput,
    RegisterInput, StatusCode, SubscribeInput, UpdateEventBody, UpdateEventInput, ID,
};
use chrono::{TimeZone, Utc};
use helpers::setup::spawn_app;

const DAY: i64 = 1000 * 60 * 60 * 24;

fn jan_1_2024() -> i64 {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .unwrap()
        .timestamp_millis()
}

fn calendar_input(title: &str) -> CreateCalendarInput {
    CreateCalendarInput {
        title: title.into(),
        color: None,
        is_public: None,
    }
}

fn midnight_event(calendar_id: ID) -> CreateEventInput {
    CreateEventInput {
        calendar_id,
        name: "Midnight check".into(),
        frequency: Some("0 0 * * *".into()),
        start_ts: jan_1_2024(),
        end_ts: jan_1_2024() + 1000 * 60 * 30,
        ..Default::default()
    }
}

#[actix_web::test]
async fn test_status_ok() {
    let (app, sdk) = spawn_app().await;
    let res = sdk.status.check_health().await.expect("Expected health");
    assert_eq!(res.active_users, 0);
    assert!(res.uptime >= 0);

    app.register("alice").await.0.user.me().await.unwrap();
    let res = sdk.status.check_health().await.unwrap();
    assert_eq!(res.active_users, 1);
    assert_eq!(res.daily_users, 1);
}

#[actix_web::test]
async fn test_register_login_and_logout() {
    let (app, sdk) = spawn_app().await;
    let (alice, user) = app.register("alice").await;

    let me = alice.user.me().await.expect("Expected to get me");
    assert_eq!(me.user.id, user.id);
    assert_eq!(me.user.username, "alice");
    assert!(me.groups.is_empty());

    let res = sdk
        .auth
        .register(RegisterInput {
            username: "alice".into(),
            password: "other".into(),
            email: None,
        })
        .await;
    assert_eq!(res.unwrap_err().status(), Some(StatusCode::CONFLICT));

    let res = sdk
        .auth
        .login(LoginInput {
            username: "alice".into(),
            password: "wrong".into(),
        })
        .await;
    assert_eq!(res.unwrap_err().status(), Some(StatusCode::UNAUTHORIZED));

    let res = sdk
        .auth
        .login(LoginInput {
            username: "alice".into(),
            password: "alice-password".into(),
        })
        .await
        .expect("Expected to login");
    assert_eq!(res.user.id, user.id);

    let session_sdk = CalenduhSDK::with_session(app.address.clone(), res.session.session_id);
    assert!(session_sdk.auth.logout().await.is_ok());
    let res = session_sdk.user.me().await;
    assert_eq!(res.unwrap_err().status(), Some(StatusCode::UNAUTHORIZED));

    // Other sessions are untouched
    assert!(alice.user.me().await.is_ok());
    assert_eq!(
        sdk.user.me().await.unwrap_err().status(),
        Some(StatusCode::UNAUTHORIZED)
    );
}

#[actix_web::test]
async fn test_calendar_access() {
    let (app, _) = spawn_app().await;
    let (alice, user) = app.register("alice").await;
    let (bob, _) = app.register("bob").await;

    let calendar = alice
        .calendar
        .create(calendar_input("Work"))
        .await
        .expect("Expected to create calendar")
        .calendar;
    assert_eq!(calendar.owner_user_id, Some(user.id));
    assert!(!calendar.is_public);

    assert_eq!(alice.calendar.mine().await.unwrap().calendars.len(), 1);
    assert!(bob.calendar.mine().await.unwrap().calendars.is_empty());
    assert!(alice.calendar.get(calendar.id).await.is_ok());
    assert_eq!(
        bob.calendar.get(calendar.id).await.unwrap_err().status(),
        Some(StatusCode::NOT_FOUND)
    );
    assert_eq!(
        bob.calendar.delete(calendar.id).await.unwrap_err().status(),
        Some(StatusCode::NOT_FOUND)
    );

    let res = alice.calendar.create(calendar_input("  ")).await;
    assert_eq!(res.unwrap_err().status(), Some(StatusCode::BAD_REQUEST));

    assert!(alice.calendar.delete(calendar.id).await.is_ok());
    assert_eq!(
        alice.calendar.get(calendar.id).await.unwrap_err().status(),
        Some(StatusCode::NOT_FOUND)
    );
}

#[actix_web::test]
async fn test_event_crud() {
    let (app, _) = spawn_app().await;
    let (alice, _) = app.register("alice").await;
    let calendar = alice.calendar.create(calendar_input("Work")).await.unwrap().calendar;

    let event = alice
        .event
        .create(midnight_event(calendar.id))
        .await
        .expect("Expected to create event")
        .event;
    assert_eq!(event.calendar_id, calendar.id);
    assert_eq!(event.priority, 0);
    assert!(!event.all_day);

    let mut invalid = midnight_event(calendar.id);
    invalid.frequency = Some("every other day".into());
    let res = alice.event.create(invalid).await;
    assert_eq!(res.unwrap_err().status(), Some(StatusCode::BAD_REQUEST));

    let mut invalid = midnight_event(calendar.id);
    invalid.end_ts = invalid.start_ts - 1;
    let res = alice.event.create(invalid).await;
    assert_eq!(res.unwrap_err().status(), Some(StatusCode::BAD_REQUEST));

    let fetched = alice.event.get(calendar.id, event.id).await.unwrap().event;
    assert_eq!(fetched.name, event.name);

    let updated = alice
        .event
        .update(UpdateEventInput {
            calendar_id: calendar.id,
            event_id: event.id,
            body: UpdateEventBody {
                name: Some("Renamed".into()),
                frequency: Some("".into()),
                ..Default::default()
            },
        })
        .await
        .expect("Expected to update event")
        .event;
    assert_eq!(updated.name, "Renamed");
    assert!(updated.frequency.is_none());
    assert_eq!(updated.start_ts, event.start_ts);

    assert!(alice.event.delete(calendar.id, event.id).await.is_ok());
    assert_eq!(
        alice.event.get(calendar.id, event.id).await.unwrap_err().status(),
        Some(StatusCode::NOT_FOUND)
    );
}

#[actix_web::test]
async fn test_calendar_occurrences() {
    let (app, _) = spawn_app().await;
    let (alice, _) = app.register("alice").await;
    let calendar = alice.calendar.create(calendar_input("Work")).await.unwrap().calendar;
    let event = alice
        .event
        .create(midnight_event(calendar.id))
        .await
        .unwrap()
        .event;

    let start = jan_1_2024();
    let occurrences = alice
        .event
        .calendar_occurrences(calendar.id, GetOccurrencesInput::new(start, start + 3 * DAY))
        .await
        .expect("Expected occurrences");
    let starts = occurrences.iter().map(|o| o.start_ts).collect::<Vec<_>>();
    assert_eq!(starts, vec![start + DAY, start + 2 * DAY]);
    for occurrence in &occurrences {
        assert_eq!(occurrence.event_id, event.id);
        assert_eq!(occurrence.end_ts - occurrence.start_ts, 1000 * 60 * 30);
    }

    // The stored instance is included when it starts strictly inside the window
    let occurrences = alice
        .event
        .calendar_occurrences(calendar.id, GetOccurrencesInput::new(start - 1, start + DAY))
        .await
        .unwrap();
    assert_eq!(occurrences.len(), 1);
    assert_eq!(occurrences[0].start_ts, start);

    let empty = alice
        .event
        .calendar_occurrences(calendar.id, GetOccurrencesInput::new(start, start))
        .await
        .unwrap();
    assert!(empty.is_empty());

    let malformed = GetOccurrencesInput {
        start: Some("abc".into()),
        end: None,
    };
    let res = alice.event.calendar_occurrences(calendar.id, malformed).await;
    assert_eq!(res.unwrap_err().status(), Some(StatusCode::BAD_REQUEST));

    let res = alice
        .event
        .calendar_occurrences(calendar.id, GetOccurrencesInput::new(start + DAY, start))
        .await;
    assert_eq!(res.unwrap_err().status(), Some(StatusCode::BAD_REQUEST));

    // Both rules are capped at 200 occurrences each
    let mut busy = midnight_event(calendar.id);
    busy.frequency = Some("* * * * *".into());
    alice.event.create(busy).await.unwrap();
    let occurrences = alice
        .event
        .calendar_occurrences(calendar.id, GetOccurrencesInput::new(start, start + 365 * DAY))
        .await
        .unwrap();
    assert_eq!(occurrences.len(), 400);
    assert!(occurrences.windows(2).all(|w| w[0].start_ts <= w[1].start_ts));
}

#[actix_web::test]
async fn test_subscriptions() {
    let (app, _) = spawn_app().await;
    let (alice, _) = app.register("alice").await;
    let (bob, _) = app.register("bob").await;
    let calendar = alice.calendar.create(calendar_input("Club")).await.unwrap().calendar;
    alice.event.create(midnight_event(calendar.id)).await.unwrap();

    let res = bob.subscription.subscribe(SubscribeInput::Calendar(calendar.id)).await;
    assert_eq!(res.unwrap_err().status(), Some(StatusCode::NOT_FOUND));

    let invite_code = calendar.invite_code.clone().expect("Expected invite code");
    let subscription = bob
        .subscription
        .subscribe(SubscribeInput::InviteCode(invite_code))
        .await
        .expect("Expected to subscribe")
        .subscription;
    assert_eq!(subscription.calendar_id, calendar.id);

    let subscribed = bob.calendar.subscribed().await.unwrap().calendars;
    assert_eq!(subscribed.len(), 1);
    assert!(bob.calendar.get(calendar.id).await.is_ok());

    let start = jan_1_2024();
    let occurrences = bob
        .event
        .my_occurrences(GetOccurrencesInput::new(start, start + 3 * DAY))
        .await
        .unwrap();
    assert_eq!(occurrences.len(), 2);
    assert!(occurrences.iter().all(|o| o.calendar_id == calendar.id));

    // Subscribers can read but not write
    let res = bob.event.create(midnight_event(calendar.id)).await;
    assert_eq!(res.unwrap_err().status(), Some(StatusCode::UNAUTHORIZED));

    assert!(bob.subscription.unsubscribe(calendar.id).await.is_ok());
    let res = bob.subscription.unsubscribe(calendar.id).await;
    assert_eq!(res.unwrap_err().status(), Some(StatusCode::NOT_FOUND));
    assert!(bob
        .event
        .my_occurrences(GetOccurrencesInput::new(start, start + 3 * DAY))
        .await
        .unwrap()
        .is_empty());
}

#[actix_web::test]
async fn test_group_occurrences() {
    let (app, _) = spawn_app().await;
    let (alice, alice_user) = app.register("alice").await;
    let (bob, _) = app.register("bob").await;

    let group = Group::new("Team".into(), 0);
    app.ctx.repos.groups.insert(&group).await.unwrap();
    app.ctx
        .repos
        .groups
        .insert_member(&GroupMember {
            group_id: group.id,
            user_id: alice_user.id,
        })
        .await
        .unwrap();

    let groups = alice.group.mine().await.unwrap().groups;
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].id, group.id);

    let res = bob
        .calendar
        .create_for_group(group.id, calendar_input("Hijack"))
        .await;
    assert_eq!(res.unwrap_err().status(), Some(StatusCode::UNAUTHORIZED));

    let calendar = alice
        .calendar
        .create_for_group(group.id, calendar_input("Team"))
        .await
        .expect("Expected to create group calendar")
        .calendar;
    assert_eq!(calendar.owner_group_id, Some(group.id));
    alice.event.create(midnight_event(calendar.id)).await.unwrap();

    let start = jan_1_2024();
    let window = GetOccurrencesInput::new(start, start + 3 * DAY);
    assert_eq!(
        alice.event.groups_occurrences(window.clone()).await.unwrap().len(),
        2
    );
    assert_eq!(
        alice
            .event
            .group_occurrences(group.id, window.clone())
            .await
            .unwrap()
            .len(),
        2
    );
    assert!(alice.event.my_occurrences(window.clone()).await.unwrap().is_empty());

    assert!(bob.event.groups_occurrences(window.clone()).await.unwrap().is_empty());
    let res = bob.event.group_occurrences(group.id, window).await;
    assert_eq!(res.unwrap_err().status(), Some(StatusCode::NOT_FOUND));
}
