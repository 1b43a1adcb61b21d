use medmentor::application::ports::{ConversationRepository, RepositoryError};
use medmentor::domain::{
    AdviceReply, ConfidenceLevel, ConversationId, DEFAULT_CONVERSATION_TITLE, EvidenceSource,
    Message, MessageRole,
};

use crate::helpers::TestPostgres;

#[tokio::test]
#[ignore = "requires Docker"]
async fn given_new_conversation_when_creating_and_retrieving_then_conversation_is_persisted() {
    let test_pg = TestPostgres::new().await;

    let created = test_pg
        .conversation_repository
        .create_conversation(DEFAULT_CONVERSATION_TITLE)
        .await
        .expect("Failed to create conversation");

    let retrieved = test_pg
        .conversation_repository
        .get_conversation(created.id)
        .await
        .expect("Failed to retrieve conversation")
        .expect("Conversation not found");

    assert_eq!(retrieved.id, created.id);
    assert_eq!(retrieved.title, "New Conversation");
    assert!(retrieved.messages.is_empty());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn given_conversation_when_appending_messages_then_messages_are_stored_in_order() {
    let test_pg = TestPostgres::new().await;
    let repository = &test_pg.conversation_repository;

    let conversation = repository
        .create_conversation("Chat Session")
        .await
        .expect("Failed to create conversation");

    let question = Message::new(
        conversation.id,
        MessageRole::User,
        "Can I take ibuprofen with amoxicillin?".to_string(),
    );
    let answer = Message::assistant_reply(
        conversation.id,
        AdviceReply::new(
            "Generally safe. This is not medical advice.",
            ConfidenceLevel::High,
            vec![
                EvidenceSource::new("Lexicomp", Some("No interaction".to_string())),
                EvidenceSource::new("FDA label", None),
            ],
        ),
    );

    repository
        .append_message(&question)
        .await
        .expect("Failed to append first message");
    repository
        .append_message(&answer)
        .await
        .expect("Failed to append second message");

    let messages = repository
        .get_messages(conversation.id)
        .await
        .expect("Failed to get messages");

    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].id, question.id);
    assert_eq!(messages[0].role, MessageRole::User);
    assert_eq!(messages[0].confidence_level, None);
    assert_eq!(messages[0].evidence_sources, None);
    assert_eq!(messages[1].id, answer.id);
    assert_eq!(messages[1].confidence_level, Some(ConfidenceLevel::High));
    assert_eq!(messages[1].evidence(), answer.evidence());

    let reloaded = repository
        .get_conversation(conversation.id)
        .await
        .expect("Failed to retrieve conversation")
        .expect("Conversation not found");
    assert_eq!(reloaded.messages.len(), 2);
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn given_unknown_conversation_when_appending_then_not_found_is_returned() {
    let test_pg = TestPostgres::new().await;
    let orphan = Message::new(ConversationId::new(), MessageRole::User, "x".to_string());

    let result = test_pg.conversation_repository.append_message(&orphan).await;

    assert!(matches!(result, Err(RepositoryError::NotFound(_))));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn given_nonexistent_conversation_id_when_retrieving_then_returns_none() {
    let test_pg = TestPostgres::new().await;

    let result = test_pg
        .conversation_repository
        .get_conversation(ConversationId::new())
        .await
        .expect("Query should succeed");

    assert!(result.is_none());
}
