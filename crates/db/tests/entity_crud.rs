//! Integration tests for quest, student, and mission repositories.
//!
//! Exercises the repository layer against a real database:
//! - Create / find / update / delete per entity
//! - Partial updates leave omitted columns untouched
//! - Foreign key enforcement on missions
//! - Restricted deletes of quests and students that still own missions

use chrono::NaiveDate;
use sqlx::PgPool;
use task_tracker_db::models::mission::{CreateMission, UpdateMission};
use task_tracker_db::models::quest::{CreateQuest, UpdateQuest};
use task_tracker_db::models::student::{CreateStudent, UpdateStudent};
use task_tracker_db::repositories::{MissionRepo, QuestRepo, StudentRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_quest(title: &str) -> CreateQuest {
    CreateQuest {
        quest_title: title.to_string(),
        quest_description: format!("{title} description"),
    }
}

fn new_student(name: &str) -> CreateStudent {
    CreateStudent {
        student_name: name.to_string(),
        student_cohort: "2024-A".to_string(),
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn new_mission(quest_id: i64, student_id: i64, title: &str, due: NaiveDate) -> CreateMission {
    CreateMission {
        quest_id,
        student_id,
        mission_title: title.to_string(),
        mission_description: format!("{title} description"),
        mission_due_date: due,
    }
}

// ---------------------------------------------------------------------------
// Quests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_find_quest(pool: PgPool) {
    let quest = QuestRepo::create(&pool, &new_quest("Dragon Slaying"))
        .await
        .unwrap();
    assert_eq!(quest.quest_title, "Dragon Slaying");

    let found = QuestRepo::find_by_id(&pool, quest.quest_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found, quest);
    assert!(QuestRepo::exists(&pool, quest.quest_id).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_created_quest_ids_are_fresh(pool: PgPool) {
    let a = QuestRepo::create(&pool, &new_quest("A")).await.unwrap();
    let b = QuestRepo::create(&pool, &new_quest("B")).await.unwrap();
    assert_ne!(a.quest_id, b.quest_id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_missing_quest_returns_none(pool: PgPool) {
    assert!(QuestRepo::find_by_id(&pool, 999_999).await.unwrap().is_none());
    assert!(!QuestRepo::exists(&pool, 999_999).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_partial_quest_update_keeps_other_fields(pool: PgPool) {
    let quest = QuestRepo::create(&pool, &new_quest("Original"))
        .await
        .unwrap();

    let update = UpdateQuest {
        quest_title: Some("Renamed".to_string()),
        ..Default::default()
    };
    let updated = QuestRepo::update(&pool, quest.quest_id, &update)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.quest_title, "Renamed");
    assert_eq!(updated.quest_description, "Original description");
    assert_eq!(updated.quest_id, quest.quest_id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_quest_returns_none(pool: PgPool) {
    let result = QuestRepo::update(&pool, 999_999, &UpdateQuest::default())
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_quest(pool: PgPool) {
    let quest = QuestRepo::create(&pool, &new_quest("Gone")).await.unwrap();

    assert!(QuestRepo::delete(&pool, quest.quest_id).await.unwrap());
    assert!(QuestRepo::find_by_id(&pool, quest.quest_id)
        .await
        .unwrap()
        .is_none());
    // Second delete finds nothing.
    assert!(!QuestRepo::delete(&pool, quest.quest_id).await.unwrap());
}

// ---------------------------------------------------------------------------
// Students
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_student_crud_cycle(pool: PgPool) {
    let student = StudentRepo::create(&pool, &new_student("Ada"))
        .await
        .unwrap();
    assert_eq!(student.student_cohort, "2024-A");

    let update = UpdateStudent {
        student_cohort: Some("2024-B".to_string()),
        ..Default::default()
    };
    let updated = StudentRepo::update(&pool, student.student_id, &update)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.student_name, "Ada");
    assert_eq!(updated.student_cohort, "2024-B");

    assert!(StudentRepo::delete(&pool, student.student_id).await.unwrap());
    assert!(!StudentRepo::exists(&pool, student.student_id).await.unwrap());
}

// ---------------------------------------------------------------------------
// Missions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_mission_round_trips_due_date(pool: PgPool) {
    let quest = QuestRepo::create(&pool, &new_quest("Q")).await.unwrap();
    let student = StudentRepo::create(&pool, &new_student("S")).await.unwrap();

    let mission = MissionRepo::create(
        &pool,
        &new_mission(quest.quest_id, student.student_id, "M", date(2024, 3, 15)),
    )
    .await
    .unwrap();

    let found = MissionRepo::find_by_id(&pool, mission.mission_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.mission_due_date, date(2024, 3, 15));

    let json = serde_json::to_value(&found).unwrap();
    assert_eq!(json["MissionDueDate"], "2024-03-15");
    assert_eq!(json["QuestID"], quest.quest_id);
    assert_eq!(json["StudentID"], student.student_id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_mission_with_unknown_quest_violates_fk(pool: PgPool) {
    let student = StudentRepo::create(&pool, &new_student("S")).await.unwrap();

    let err = MissionRepo::create(
        &pool,
        &new_mission(999_999, student.student_id, "Orphan", date(2024, 1, 1)),
    )
    .await
    .unwrap_err();

    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23503"));
        }
        other => panic!("expected foreign key violation, got {other:?}"),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_mission_update_is_partial_and_idempotent(pool: PgPool) {
    let quest = QuestRepo::create(&pool, &new_quest("Q")).await.unwrap();
    let student = StudentRepo::create(&pool, &new_student("S")).await.unwrap();
    let mission = MissionRepo::create(
        &pool,
        &new_mission(quest.quest_id, student.student_id, "M", date(2024, 3, 15)),
    )
    .await
    .unwrap();

    let update = UpdateMission {
        mission_due_date: Some(date(2024, 4, 1)),
        ..Default::default()
    };
    let first = MissionRepo::update(&pool, mission.mission_id, &update)
        .await
        .unwrap()
        .unwrap();
    let second = MissionRepo::update(&pool, mission.mission_id, &update)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(first.mission_due_date, date(2024, 4, 1));
    assert_eq!(first.mission_title, mission.mission_title);
    assert_eq!(first.quest_id, mission.quest_id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_and_count_missions_by_owner(pool: PgPool) {
    let quest = QuestRepo::create(&pool, &new_quest("Q")).await.unwrap();
    let other_quest = QuestRepo::create(&pool, &new_quest("Other")).await.unwrap();
    let student = StudentRepo::create(&pool, &new_student("S")).await.unwrap();

    let late = MissionRepo::create(
        &pool,
        &new_mission(quest.quest_id, student.student_id, "Late", date(2024, 6, 1)),
    )
    .await
    .unwrap();
    let early = MissionRepo::create(
        &pool,
        &new_mission(quest.quest_id, student.student_id, "Early", date(2024, 2, 1)),
    )
    .await
    .unwrap();
    MissionRepo::create(
        &pool,
        &new_mission(other_quest.quest_id, student.student_id, "Elsewhere", date(2024, 1, 1)),
    )
    .await
    .unwrap();

    let by_quest = MissionRepo::list_by_quest(&pool, quest.quest_id).await.unwrap();
    let ids: Vec<i64> = by_quest.iter().map(|m| m.mission_id).collect();
    assert_eq!(ids, vec![early.mission_id, late.mission_id]);

    assert_eq!(
        MissionRepo::count_by_quest(&pool, quest.quest_id).await.unwrap(),
        2
    );
    assert_eq!(
        MissionRepo::count_by_student(&pool, student.student_id)
            .await
            .unwrap(),
        3
    );
    assert_eq!(
        MissionRepo::list_by_student(&pool, student.student_id)
            .await
            .unwrap()
            .len(),
        3
    );
}

// ---------------------------------------------------------------------------
// Restricted deletes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_quest_with_missions_is_restricted(pool: PgPool) {
    let quest = QuestRepo::create(&pool, &new_quest("Q")).await.unwrap();
    let student = StudentRepo::create(&pool, &new_student("S")).await.unwrap();
    let mission = MissionRepo::create(
        &pool,
        &new_mission(quest.quest_id, student.student_id, "M", date(2024, 3, 15)),
    )
    .await
    .unwrap();

    let err = QuestRepo::delete(&pool, quest.quest_id).await.unwrap_err();
    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23503"));
        }
        other => panic!("expected foreign key violation, got {other:?}"),
    }

    // Once the mission is gone the quest and student can be deleted.
    assert!(MissionRepo::delete(&pool, mission.mission_id).await.unwrap());
    assert!(QuestRepo::delete(&pool, quest.quest_id).await.unwrap());
    assert!(StudentRepo::delete(&pool, student.student_id).await.unwrap());
}
