//! Every record reads back exactly as it was written.

mod support;

use domain::{
    Answer, Attempt, Choice, ChoiceView, Enrollment, NewAnswer, NewAttempt, NewChoice,
    NewEnrollment, NewQuestion, NewQuiz, NewRole, NewSubject, NewUser, QuestionType, Quiz,
    Subject, UserResponse,
};
use quiz_store_lib::repository::{
    AttemptRepository, QuizRepository, SubjectRepository, UserRepository,
};

use support::{create_quiz, create_user, timestamp, TestDb};

#[tokio::test]
async fn user_and_role_round_trip() {
    let test = TestDb::new().await;
    let users = test.persistence.users();

    let user = users
        .create_user(NewUser::new("ada", "ada@example.com", "$argon2id$v=19$abc"))
        .await
        .unwrap();
    assert_eq!(user.username, "ada");
    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.password_hash, "$argon2id$v=19$abc");

    assert_eq!(users.find_by_id(user.id).await.unwrap(), Some(user.clone()));
    assert_eq!(users.find_by_username("ada").await.unwrap(), Some(user.clone()));
    assert_eq!(users.find_by_email("ada@example.com").await.unwrap(), Some(user.clone()));
    assert_eq!(users.find_by_username("nobody").await.unwrap(), None);

    let role = users.create_role(NewRole::new("instructor")).await.unwrap();
    assert_eq!(users.find_role_by_name("instructor").await.unwrap(), Some(role.clone()));
    assert_eq!(users.list_roles().await.unwrap(), vec![role.clone()]);

    let assignment = users.assign_role(user.id, role.id).await.unwrap();
    assert_eq!(assignment.user_id, user.id);
    assert_eq!(assignment.role_id, role.id);
    assert_eq!(users.roles_for_user(user.id).await.unwrap(), vec![role]);

    let json = serde_json::to_string(&UserResponse::from(user)).unwrap();
    assert!(!json.contains("password"));
}

#[tokio::test]
async fn subject_and_enrollment_round_trip() {
    let test = TestDb::new().await;
    let ada = create_user(&test.persistence, "ada").await;
    let subjects = test.persistence.subjects();

    let subject = subjects
        .create_subject(NewSubject::new("Chemistry").with_description("Atoms and bonds"))
        .await
        .unwrap();
    assert_eq!(
        subject,
        Subject {
            id: subject.id,
            name: "Chemistry".to_string(),
            description: Some("Atoms and bonds".to_string()),
        }
    );
    assert_eq!(subjects.find_by_id(subject.id).await.unwrap(), Some(subject.clone()));
    assert_eq!(subjects.find_by_name("Chemistry").await.unwrap(), Some(subject.clone()));
    assert_eq!(subjects.list_subjects().await.unwrap(), vec![subject.clone()]);

    let enrollment = subjects
        .enroll(NewEnrollment::new(ada.id, subject.id))
        .await
        .unwrap();
    assert_eq!(
        subjects.enrollments_for_user(ada.id).await.unwrap(),
        vec![Enrollment {
            id: enrollment.id,
            user_id: ada.id,
            subject_id: subject.id,
        }]
    );
}

#[tokio::test]
async fn quiz_round_trip_keeps_every_field() {
    let test = TestDb::new().await;
    let ada = create_user(&test.persistence, "ada").await;
    let subject = test
        .persistence
        .subjects()
        .create_subject(NewSubject::new("History"))
        .await
        .unwrap();
    let quizzes = test.persistence.quizzes();

    let quiz = quizzes
        .create_quiz(
            NewQuiz::new(ada.id, "Midterm")
                .with_description("Chapters 1-4")
                .in_subject(subject.id)
                .with_total_marks(40)
                .published()
                .with_window(timestamp(1_700_000_000), timestamp(1_700_003_600))
                .with_duration_seconds(1800),
        )
        .await
        .unwrap();

    let expected = Quiz {
        id: quiz.id,
        title: "Midterm".to_string(),
        description: Some("Chapters 1-4".to_string()),
        subject_id: Some(subject.id),
        creator_user_id: ada.id,
        total_marks: Some(40),
        is_published: true,
        start_time: Some(timestamp(1_700_000_000)),
        end_time: Some(timestamp(1_700_003_600)),
        allowed_duration_seconds: Some(1800),
    };
    assert_eq!(quiz, expected);
    assert_eq!(quizzes.find_quiz(quiz.id).await.unwrap(), Some(expected.clone()));
    assert_eq!(quizzes.quizzes_by_creator(ada.id).await.unwrap(), vec![expected.clone()]);
    assert_eq!(quizzes.quizzes_for_subject(subject.id).await.unwrap(), vec![expected]);
}

#[tokio::test]
async fn list_published_skips_drafts() {
    let test = TestDb::new().await;
    let ada = create_user(&test.persistence, "ada").await;
    let quizzes = test.persistence.quizzes();

    create_quiz(&test.persistence, ada.id, "Draft").await;
    let live = quizzes
        .create_quiz(NewQuiz::new(ada.id, "Live").published())
        .await
        .unwrap();

    assert_eq!(quizzes.list_published().await.unwrap(), vec![live]);
}

#[tokio::test]
async fn questions_and_choices_come_back_in_position_order() {
    let test = TestDb::new().await;
    let ada = create_user(&test.persistence, "ada").await;
    let quiz = create_quiz(&test.persistence, ada.id, "Ordering").await;
    let quizzes = test.persistence.quizzes();

    let second = quizzes
        .create_question(
            NewQuestion::new(quiz.id, "Pick the primes")
                .of_type(QuestionType::McqMultiple)
                .with_marks(3)
                .at_position(2),
        )
        .await
        .unwrap();
    let first = quizzes
        .create_question(
            NewQuestion::new(quiz.id, "Explain recursion")
                .of_type(QuestionType::Short)
                .at_position(1),
        )
        .await
        .unwrap();
    let tied = quizzes
        .create_question(NewQuestion::new(quiz.id, "Also second").at_position(2))
        .await
        .unwrap();

    assert_eq!(second.question_type, QuestionType::McqMultiple);
    assert_eq!(second.marks, 3);
    assert_eq!(
        quizzes.questions_for_quiz(quiz.id).await.unwrap(),
        vec![first, second.clone(), tied]
    );

    let seven = quizzes
        .create_choice(NewChoice::new(second.id, "7").correct().at_position(1))
        .await
        .unwrap();
    let two = quizzes
        .create_choice(NewChoice::new(second.id, "2").correct().at_position(0))
        .await
        .unwrap();
    let nine = quizzes
        .create_choice(NewChoice::new(second.id, "9").at_position(2))
        .await
        .unwrap();

    assert_eq!(
        seven,
        Choice {
            id: seven.id,
            question_id: second.id,
            text: "7".to_string(),
            is_correct: true,
            position: 1,
        }
    );
    assert_eq!(quizzes.find_choice(nine.id).await.unwrap(), Some(nine.clone()));

    let choices = quizzes.choices_for_question(second.id).await.unwrap();
    assert_eq!(choices, vec![two, seven, nine]);

    let views: Vec<ChoiceView> = choices.iter().map(ChoiceView::from).collect();
    let json = serde_json::to_string(&views).unwrap();
    assert!(!json.contains("is_correct"));
}

#[tokio::test]
async fn attempt_and_answers_round_trip() {
    let test = TestDb::new().await;
    let ada = create_user(&test.persistence, "ada").await;
    let student = create_user(&test.persistence, "sam").await;
    let quiz = create_quiz(&test.persistence, ada.id, "Quiz 1").await;
    let quizzes = test.persistence.quizzes();
    let attempts = test.persistence.attempts();

    let mcq = quizzes
        .create_question(NewQuestion::new(quiz.id, "Pick two").of_type(QuestionType::McqMultiple))
        .await
        .unwrap();
    let a = quizzes.create_choice(NewChoice::new(mcq.id, "a")).await.unwrap();
    let b = quizzes.create_choice(NewChoice::new(mcq.id, "b")).await.unwrap();
    let short = quizzes
        .create_question(NewQuestion::new(quiz.id, "Why?").of_type(QuestionType::Short))
        .await
        .unwrap();

    let attempt = attempts
        .create_attempt(
            NewAttempt::new(quiz.id, student.id)
                .started_at(timestamp(1_700_000_000))
                .submitted_at(timestamp(1_700_000_900))
                .graded(7.5)
                .with_client("203.0.113.9", "Mozilla/5.0"),
        )
        .await
        .unwrap();
    let expected = Attempt {
        id: attempt.id,
        quiz_id: quiz.id,
        user_id: student.id,
        started_at: Some(timestamp(1_700_000_000)),
        submitted_at: Some(timestamp(1_700_000_900)),
        score: Some(7.5),
        is_graded: true,
        ip_address: Some("203.0.113.9".to_string()),
        user_agent: Some("Mozilla/5.0".to_string()),
    };
    assert_eq!(attempt, expected);
    assert_eq!(attempts.find_attempt(attempt.id).await.unwrap(), Some(expected.clone()));
    assert_eq!(attempts.attempts_for_quiz(quiz.id).await.unwrap(), vec![expected.clone()]);
    assert_eq!(attempts.attempts_for_user(student.id).await.unwrap(), vec![expected]);

    let selected = attempts
        .record_answer(
            NewAnswer::new(attempt.id)
                .for_question(mcq.id)
                .selecting(vec![b.id, a.id])
                .with_marks(2.0),
        )
        .await
        .unwrap();
    let written = attempts
        .record_answer(
            NewAnswer::new(attempt.id)
                .for_question(short.id)
                .with_text("Because it terminates"),
        )
        .await
        .unwrap();
    let loose = attempts.record_answer(NewAnswer::new(attempt.id)).await.unwrap();

    assert_eq!(
        selected,
        Answer {
            id: selected.id,
            attempt_id: attempt.id,
            question_id: Some(mcq.id),
            selected_choice_ids: Some(vec![b.id, a.id]),
            text_response: None,
            marks_awarded: Some(2.0),
        }
    );
    assert_eq!(written.text_response.as_deref(), Some("Because it terminates"));
    assert_eq!(written.selected_choice_ids, None);
    assert_eq!(loose.question_id, None);

    assert_eq!(attempts.find_answer(selected.id).await.unwrap(), Some(selected.clone()));
    assert_eq!(
        attempts.answers_for_attempt(attempt.id).await.unwrap(),
        vec![selected, written, loose]
    );
}

#[tokio::test]
async fn missing_records_read_as_none() {
    let test = TestDb::new().await;

    assert_eq!(test.persistence.users().find_by_id(1).await.unwrap(), None);
    assert_eq!(test.persistence.subjects().find_by_id(1).await.unwrap(), None);
    assert_eq!(test.persistence.quizzes().find_quiz(1).await.unwrap(), None);
    assert_eq!(test.persistence.quizzes().find_question(1).await.unwrap(), None);
    assert_eq!(test.persistence.attempts().find_attempt(1).await.unwrap(), None);
    assert_eq!(test.persistence.attempts().find_answer(1).await.unwrap(), None);
}
