//! Task assignment, completion, and the intern-removal fallout.

use serde_json::json;

use intrasphere_core::TaskStatus;
use intrasphere_integration_tests::TestPortal;
use intrasphere_portal::db::TaskRepository;
use intrasphere_portal::store::{Table, TableStore as _};
use intrasphere_portal::views::NoticeLevel;

#[tokio::test]
async fn test_admin_assigns_and_intern_completes() {
    let portal = TestPortal::new().await;
    let intern = portal.add_intern("Priya").await;

    let mut admin = portal.admin_view().await;
    admin.assign_task("Set up laptop", intern.id).await;
    assert!(
        admin
            .notices
            .iter()
            .any(|n| n.level == NoticeLevel::Success && n.text == "Task assigned!")
    );

    let mut view = portal.intern_view("Priya").await;
    assert_eq!(view.tasks.len(), 1);
    let task = view.tasks.first().expect("task visible").clone();
    assert_eq!(task.status, TaskStatus::Pending);
    assert_eq!(task.title, "Set up laptop");

    view.complete_task(task.id).await;
    let task = view.tasks.first().expect("task still listed");
    assert_eq!(task.status, TaskStatus::Completed);

    // The admin overview reflects the completion with the owner's name
    let admin = portal.admin_view().await;
    let joined = admin.tasks.first().expect("task in overview");
    assert_eq!(joined.intern_name, "Priya");
    assert_eq!(joined.task.status, TaskStatus::Completed);
}

#[tokio::test]
async fn test_completing_twice_is_a_no_op() {
    let portal = TestPortal::new().await;
    let intern = portal.add_intern("Priya").await;

    let tasks = TaskRepository::new(&portal.store);
    let task = tasks.assign("Write report", intern.id).await.expect("assign");

    let first = tasks.complete(task.id).await.expect("first complete");
    assert_eq!(first.status, TaskStatus::Completed);

    let second = tasks.complete(task.id).await.expect("second complete");
    assert_eq!(second.status, TaskStatus::Completed);
}

#[tokio::test]
async fn test_intern_tasks_are_listed_newest_first() {
    let portal = TestPortal::new().await;
    let intern = portal.add_intern("Priya").await;

    let tasks = TaskRepository::new(&portal.store);
    for title in ["first", "second", "third"] {
        tasks.assign(title, intern.id).await.expect("assign");
    }

    let view = portal.intern_view("Priya").await;
    let titles: Vec<&str> = view.tasks.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, ["third", "second", "first"]);
}

#[tokio::test]
async fn test_removing_intern_with_pending_tasks_breaks_nothing() {
    let portal = TestPortal::new().await;
    let intern = portal.add_intern("Priya").await;

    let mut admin = portal.admin_view().await;
    admin.assign_task("Task one", intern.id).await;
    admin.assign_task("Task two", intern.id).await;
    assert_eq!(admin.tasks.len(), 2);

    admin.remove_intern(intern.id).await;

    // The refetched overview omits the removed intern's tasks and the
    // refresh itself must not error
    assert!(admin.tasks.is_empty());
    assert!(
        admin.notices.iter().all(|n| n.level != NoticeLevel::Error),
        "no unhandled error may surface: {:?}",
        admin.notices
    );
}

#[tokio::test]
async fn test_orphaned_task_resolves_to_fallback_label() {
    let portal = TestPortal::new().await;

    // An orphaned row, as left behind by a store without cascade
    portal
        .store
        .insert(
            Table::Tasks,
            json!({
                "title": "Ghost task",
                "intern_id": "00000000-0000-0000-0000-00000000dead",
                "status": "pending",
            }),
        )
        .await
        .expect("insert orphan");

    let admin = portal.admin_view().await;
    let joined = admin.tasks.first().expect("orphan still listed");
    assert_eq!(joined.intern_name, "Unknown Intern");
}
