//! The notes feed: addressing, visibility, read state, enrichment.

use std::collections::HashSet;

use intrasphere_core::{NoteId, Role};
use intrasphere_integration_tests::TestPortal;
use intrasphere_portal::db::NoteRepository;
use intrasphere_portal::models::NoteTarget;
use intrasphere_portal::views::NoticeLevel;

#[tokio::test]
async fn test_group_note_reaches_every_intern_and_the_founder() {
    let portal = TestPortal::new().await;
    let _priya = portal.add_intern("Priya").await;
    let _marco = portal.add_intern("Marco").await;

    let mut admin = portal.admin_view().await;
    admin.send_note("Welcome", NoteTarget::Group).await;
    assert!(
        admin
            .notices
            .iter()
            .any(|n| n.level == NoticeLevel::Success && n.text == "Group message sent!")
    );

    // The note itself
    let sent = admin.notes.first().expect("in admin's own inbox");
    assert!(sent.note.is_group);
    assert_eq!(sent.note.receiver_id, None);
    assert_eq!(sent.note.sender_role, Role::Admin);
    assert_eq!(sent.sender_name, "Founder");

    // Every current intern sees the broadcast
    for name in ["Priya", "Marco"] {
        let view = portal.intern_view(name).await;
        assert_eq!(view.notes.len(), 1, "{name} must see the broadcast");
        assert!(view.notes.first().expect("note").is_group);
    }
}

#[tokio::test]
async fn test_group_notes_are_visible_to_interns_who_join_later() {
    let portal = TestPortal::new().await;

    let mut admin = portal.admin_view().await;
    admin.send_note("Welcome", NoteTarget::Group).await;

    // Joined after the send; no retroactive filtering by creation order
    portal.add_intern("Priya").await;
    let view = portal.intern_view("Priya").await;
    assert_eq!(view.notes.len(), 1);
}

#[tokio::test]
async fn test_intern_note_reaches_founder_and_self_only() {
    let portal = TestPortal::new().await;
    portal.add_intern("Priya").await;
    portal.add_intern("Marco").await;

    let mut priya = portal.intern_view("Priya").await;
    priya.send_note("Done with setup").await;
    assert!(
        priya
            .notices
            .iter()
            .any(|n| n.level == NoticeLevel::Success && n.text == "Note sent to founder")
    );

    // Echoed back into the sender's own feed
    let sent = priya.notes.first().expect("own note visible").clone();
    assert_eq!(sent.sender_role, Role::Intern);
    assert!(!sent.is_read);
    assert_eq!(priya.sender_label(&sent), "You");

    // Visible to the founder, resolved to the intern's name
    let admin = portal.admin_view().await;
    let received = admin.notes.first().expect("in admin inbox");
    assert_eq!(received.note.id, sent.id);
    assert_eq!(received.sender_name, "Priya");

    // Invisible to other interns
    let marco = portal.intern_view("Marco").await;
    assert!(marco.notes.is_empty());
}

#[tokio::test]
async fn test_direct_note_is_invisible_to_other_interns() {
    let portal = TestPortal::new().await;
    let priya = portal.add_intern("Priya").await;
    portal.add_intern("Marco").await;

    let mut admin = portal.admin_view().await;
    admin
        .send_note("Your badge is ready", NoteTarget::Direct(priya.id))
        .await;
    assert!(
        admin
            .notices
            .iter()
            .any(|n| n.level == NoticeLevel::Success && n.text == "Note sent!")
    );

    let priya_view = portal.intern_view("Priya").await;
    assert_eq!(priya_view.notes.len(), 1);
    assert_eq!(
        priya_view.notes.first().expect("note").receiver_id,
        Some(priya.id)
    );

    let marco_view = portal.intern_view("Marco").await;
    assert!(
        marco_view.notes.is_empty(),
        "a direct note to another intern must stay invisible"
    );
}

#[tokio::test]
async fn test_admin_inbox_is_authored_union_intern_sent() {
    let portal = TestPortal::new().await;
    let priya = portal.add_intern("Priya").await;
    portal.add_intern("Marco").await;

    let notes = NoteRepository::new(&portal.store);
    let founder = portal.founder_id();

    let mut expected: HashSet<NoteId> = HashSet::new();
    let group = notes
        .send_from_admin(founder, "Standup at 10", NoteTarget::Group)
        .await
        .expect("group send");
    expected.insert(group.id);

    let direct = notes
        .send_from_admin(founder, "See me", NoteTarget::Direct(priya.id))
        .await
        .expect("direct send");
    expected.insert(direct.id);

    let from_priya = notes
        .send_from_intern(priya.id, "On my way")
        .await
        .expect("intern send");
    expected.insert(from_priya.id);

    let inbox: HashSet<NoteId> = notes
        .admin_inbox(founder)
        .await
        .expect("admin inbox")
        .into_iter()
        .map(|n| n.id)
        .collect();
    assert_eq!(inbox, expected);
}

#[tokio::test]
async fn test_note_feed_is_newest_first() {
    let portal = TestPortal::new().await;
    let priya = portal.add_intern("Priya").await;

    let notes = NoteRepository::new(&portal.store);
    let founder = portal.founder_id();
    notes
        .send_from_admin(founder, "first", NoteTarget::Direct(priya.id))
        .await
        .expect("send");
    notes
        .send_from_intern(priya.id, "second")
        .await
        .expect("send");
    notes
        .send_from_admin(founder, "third", NoteTarget::Group)
        .await
        .expect("send");

    let admin = portal.admin_view().await;
    let contents: Vec<&str> = admin.notes.iter().map(|n| n.note.content.as_str()).collect();
    assert_eq!(contents, ["third", "second", "first"]);

    let view = portal.intern_view("Priya").await;
    let contents: Vec<&str> = view.notes.iter().map(|n| n.content.as_str()).collect();
    assert_eq!(contents, ["third", "second", "first"]);
}

#[tokio::test]
async fn test_mark_read_sticks_and_is_idempotent() {
    let portal = TestPortal::new().await;
    let priya = portal.add_intern("Priya").await;

    let notes = NoteRepository::new(&portal.store);
    let note = notes
        .send_from_intern(priya.id, "Done with setup")
        .await
        .expect("send");
    assert!(!note.is_read);

    let mut admin = portal.admin_view().await;
    admin.mark_read(note.id).await;
    let shown = admin.notes.first().expect("note in inbox");
    assert!(shown.note.is_read);

    // Marking again leaves it read, with no error
    admin.mark_read(note.id).await;
    let shown = admin.notes.first().expect("note in inbox");
    assert!(shown.note.is_read);
    assert!(admin.notices.iter().all(|n| n.level != NoticeLevel::Error));
}

#[tokio::test]
async fn test_notes_from_a_removed_intern_fall_back_to_unknown() {
    let portal = TestPortal::new().await;
    let priya = portal.add_intern("Priya").await;

    let mut view = portal.intern_view("Priya").await;
    view.send_note("Done with setup").await;

    let mut admin = portal.admin_view().await;
    admin.remove_intern(priya.id).await;

    // The note survives the removal; its sender no longer resolves
    let orphan = admin.notes.first().expect("note kept as history");
    assert_eq!(orphan.sender_name, "Unknown Intern");
    assert!(
        admin.notices.iter().all(|n| n.level != NoticeLevel::Error),
        "no unhandled error may surface: {:?}",
        admin.notices
    );
}

#[tokio::test]
async fn test_blank_note_surfaces_an_error_notice_and_changes_nothing() {
    let portal = TestPortal::new().await;
    portal.add_intern("Priya").await;

    let mut view = portal.intern_view("Priya").await;
    view.send_note("   ").await;

    assert!(view.notes.is_empty(), "nothing may be stored");
    assert!(
        view.notices.iter().any(|n| n.level == NoticeLevel::Error),
        "the failure must surface as a notice"
    );
}
