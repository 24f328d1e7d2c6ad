//! Read-side debate queries, always scoped to the caller.

use std::sync::Arc;

use super::load_owned_debate;
use crate::domain::debate::{Debate, DebateError, Message};
use crate::domain::foundation::{DebateId, UserId};
use crate::ports::{DebateFilter, DebateRepository, MessageRepository};

#[derive(Debug, Clone)]
pub struct GetDebateQuery {
    pub user_id: UserId,
    pub debate_id: DebateId,
}

pub struct GetDebateHandler {
    debates: Arc<dyn DebateRepository>,
}

impl GetDebateHandler {
    pub fn new(debates: Arc<dyn DebateRepository>) -> Self {
        Self { debates }
    }

    pub async fn handle(&self, query: GetDebateQuery) -> Result<Debate, DebateError> {
        load_owned_debate(self.debates.as_ref(), query.debate_id, &query.user_id).await
    }
}

#[derive(Debug, Clone)]
pub struct ListDebatesQuery {
    pub user_id: UserId,
    pub filter: DebateFilter,
}

pub struct ListDebatesHandler {
    debates: Arc<dyn DebateRepository>,
}

impl ListDebatesHandler {
    pub fn new(debates: Arc<dyn DebateRepository>) -> Self {
        Self { debates }
    }

    /// Newest first.
    pub async fn handle(&self, query: ListDebatesQuery) -> Result<Vec<Debate>, DebateError> {
        Ok(self.debates.find_by_user(&query.user_id, query.filter).await?)
    }
}

#[derive(Debug, Clone)]
pub struct GetMessagesQuery {
    pub user_id: UserId,
    pub debate_id: DebateId,
}

pub struct GetMessagesHandler {
    debates: Arc<dyn DebateRepository>,
    messages: Arc<dyn MessageRepository>,
}

impl GetMessagesHandler {
    pub fn new(debates: Arc<dyn DebateRepository>, messages: Arc<dyn MessageRepository>) -> Self {
        Self { debates, messages }
    }

    /// Chronological transcript.
    pub async fn handle(&self, query: GetMessagesQuery) -> Result<Vec<Message>, DebateError> {
        let debate = load_owned_debate(self.debates.as_ref(), query.debate_id, &query.user_id).await?;
        Ok(self.messages.find_by_debate(&debate.id()).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::TestWorld;
    use crate::domain::debate::{DebateKind, Stance};
    use crate::domain::foundation::Timestamp;
    use crate::domain::user::Level;

    async fn seed(world: &TestWorld, user: &UserId) -> (Debate, Debate) {
        let topic = world.topic("Les zoos", Level::Beginner).await;
        let other = world.topic("Les jeux vidéo", Level::Beginner).await;

        let mut done = Debate::start(user.clone(), topic.id(), Stance::For, DebateKind::Test);
        done.finish(Timestamp::now()).unwrap();
        world.debates.save(&done).await.unwrap();

        let running = Debate::start(user.clone(), other.id(), Stance::Against, DebateKind::Training);
        world.debates.save(&running).await.unwrap();
        (done, running)
    }

    #[tokio::test]
    async fn list_applies_status_filter() {
        let world = TestWorld::new();
        let user = world.user("alice").await;
        let (done, running) = seed(&world, &user.id).await;
        let h = ListDebatesHandler::new(world.debate_repo());

        let all = h
            .handle(ListDebatesQuery {
                user_id: user.id.clone(),
                filter: DebateFilter::All,
            })
            .await
            .unwrap();
        let finished = h
            .handle(ListDebatesQuery {
                user_id: user.id.clone(),
                filter: DebateFilter::Finished,
            })
            .await
            .unwrap();
        let in_progress = h
            .handle(ListDebatesQuery {
                user_id: user.id.clone(),
                filter: DebateFilter::InProgress,
            })
            .await
            .unwrap();

        assert_eq!(all.len(), 2);
        assert_eq!(finished.iter().map(Debate::id).collect::<Vec<_>>(), vec![done.id()]);
        assert_eq!(in_progress.iter().map(Debate::id).collect::<Vec<_>>(), vec![running.id()]);
    }

    #[tokio::test]
    async fn list_only_shows_own_debates() {
        let world = TestWorld::new();
        let alice = world.user("alice").await;
        let bob = world.user("bob").await;
        seed(&world, &alice.id).await;

        let bobs = ListDebatesHandler::new(world.debate_repo())
            .handle(ListDebatesQuery {
                user_id: bob.id.clone(),
                filter: DebateFilter::All,
            })
            .await
            .unwrap();

        assert!(bobs.is_empty());
    }

    #[tokio::test]
    async fn get_hides_foreign_debates() {
        let world = TestWorld::new();
        let alice = world.user("alice").await;
        let bob = world.user("bob").await;
        let (done, _) = seed(&world, &alice.id).await;
        let h = GetDebateHandler::new(world.debate_repo());

        let mine = h
            .handle(GetDebateQuery {
                user_id: alice.id.clone(),
                debate_id: done.id(),
            })
            .await
            .unwrap();
        let err = h
            .handle(GetDebateQuery {
                user_id: bob.id.clone(),
                debate_id: done.id(),
            })
            .await
            .unwrap_err();

        assert_eq!(mine.id(), done.id());
        assert_eq!(err, DebateError::NotFound(done.id()));
    }

    #[tokio::test]
    async fn messages_come_back_in_order() {
        let world = TestWorld::new();
        let user = world.user("alice").await;
        let (_, running) = seed(&world, &user.id).await;
        for text in ["un", "deux", "trois"] {
            world
                .messages
                .save(&Message::from_chatbot(running.id(), text))
                .await
                .unwrap();
        }

        let transcript = GetMessagesHandler::new(world.debate_repo(), world.message_repo())
            .handle(GetMessagesQuery {
                user_id: user.id.clone(),
                debate_id: running.id(),
            })
            .await
            .unwrap();

        let texts: Vec<_> = transcript.iter().map(|m| m.content()).collect();
        assert_eq!(texts, vec!["un", "deux", "trois"]);
    }
}
