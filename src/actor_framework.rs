use std::fmt::{Debug, Display};
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument};

// =============================================================================
// 1. THE ABSTRACTION (Entity trait with hooks, params, and actions)
// =============================================================================

/// Trait that any domain entity must implement to be managed by ResourceActor
pub trait Entity: Clone + Debug + Send + Sync + 'static {
    type Id: Eq + Clone + Send + Sync + Display + Debug;
    type CreateParams: Send + Debug;
    type Patch: Send + Debug;

    // --- Custom Actions ---
    type Action: Send + Debug;
    type ActionResult: Send + Debug;

    /// Get the ID of the entity
    fn id(&self) -> &Self::Id;

    /// Construct the full entity from the ID and creation parameters
    fn from_create_params(id: Self::Id, params: Self::CreateParams) -> Result<Self, String>;

    /// Merge a partial update into the entity
    fn on_update(&mut self, patch: Self::Patch) -> Result<(), String>;

    /// Handle a custom domain-specific action
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, String>;
}

// =============================================================================
// 2. ERRORS AND NOTIFICATIONS
// =============================================================================

/// Transport-level failures plus entity hook rejections.
///
/// Unknown-id mutations are NOT errors: the actor answers them with an absent
/// result and callers must check for it.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error("actor channel closed")]
    ChannelClosed,
    #[error("actor dropped the response channel")]
    ResponseDropped,
    #[error("{0}")]
    Rejected(String),
}

/// Fire-and-forget event pushed on the caller-supplied notification channel
/// after every successful mutation (the UI layer turns these into toasts).
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub entity: &'static str,
    pub event: StoreEvent,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    Created(String),
    Updated(String),
    Deleted(String),
    Loaded(usize),
}

// =============================================================================
// 3. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Create {
        params: T::CreateParams,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    /// Snapshot of the whole collection in insertion order.
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        patch: T::Patch,
        respond_to: Response<Option<T>>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<bool>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<Option<T::ActionResult>>,
    },
    /// Atomic whole-collection replacement (seed loads; last write wins).
    Replace {
        items: Vec<T>,
        respond_to: Response<usize>,
    },
}

// =============================================================================
// 4. THE GENERIC ACTOR SERVER
// =============================================================================

/// Single-writer actor owning an ordered collection of one entity type.
///
/// The collection is a `Vec` rather than a map: the dashboard views care about
/// collection order, and the stores only ever hold a few hundred records, so
/// id lookup is a linear scan.
pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: Vec<T>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
    entity_name: &'static str,
    notifier: Option<mpsc::UnboundedSender<Notification>>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(
        buffer_size: usize,
        entity_name: &'static str,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: Vec::new(),
            next_id_fn: Box::new(next_id_fn),
            entity_name,
            notifier: None,
        };
        let client = ResourceClient { sender };
        (actor, client)
    }

    /// Attach the caller-supplied notification channel.
    pub fn with_notifier(mut self, sender: mpsc::UnboundedSender<Notification>) -> Self {
        self.notifier = Some(sender);
        self
    }

    #[instrument(name = "resource_actor", skip(self), fields(entity = self.entity_name))]
    pub async fn run(mut self) {
        info!("Resource actor starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    let id = (self.next_id_fn)();
                    let reply = match T::from_create_params(id, params) {
                        Ok(item) => {
                            self.store.push(item.clone());
                            Ok(item)
                        }
                        Err(reason) => Err(FrameworkError::Rejected(reason)),
                    };
                    if let Ok(item) = &reply {
                        self.notify(StoreEvent::Created(item.id().to_string()));
                    }
                    let _ = respond_to.send(reply);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.find(&id).cloned();
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    let _ = respond_to.send(Ok(self.store.clone()));
                }
                ResourceRequest::Update {
                    id,
                    patch,
                    respond_to,
                } => {
                    let reply = match self.find_mut(&id) {
                        Some(item) => match item.on_update(patch) {
                            Ok(()) => Ok(Some(item.clone())),
                            Err(reason) => Err(FrameworkError::Rejected(reason)),
                        },
                        None => {
                            debug!(%id, "Update target not found");
                            Ok(None)
                        }
                    };
                    if matches!(&reply, Ok(Some(_))) {
                        self.notify(StoreEvent::Updated(id.to_string()));
                    }
                    let _ = respond_to.send(reply);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    let removed = match self.store.iter().position(|item| item.id() == &id) {
                        Some(index) => {
                            self.store.remove(index);
                            true
                        }
                        // Deleting an absent record is a no-op, not a fault.
                        None => false,
                    };
                    if removed {
                        self.notify(StoreEvent::Deleted(id.to_string()));
                    }
                    let _ = respond_to.send(Ok(removed));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    let reply = match self.find_mut(&id) {
                        Some(item) => match item.handle_action(action) {
                            Ok(result) => Ok(Some(result)),
                            Err(reason) => Err(FrameworkError::Rejected(reason)),
                        },
                        None => {
                            debug!(%id, "Action target not found");
                            Ok(None)
                        }
                    };
                    if matches!(&reply, Ok(Some(_))) {
                        self.notify(StoreEvent::Updated(id.to_string()));
                    }
                    let _ = respond_to.send(reply);
                }
                ResourceRequest::Replace { items, respond_to } => {
                    let count = items.len();
                    self.store = items;
                    self.notify(StoreEvent::Loaded(count));
                    let _ = respond_to.send(Ok(count));
                }
            }
        }

        info!("Resource actor stopped");
    }

    fn find(&self, id: &T::Id) -> Option<&T> {
        self.store.iter().find(|item| item.id() == id)
    }

    fn find_mut(&mut self, id: &T::Id) -> Option<&mut T> {
        self.store.iter_mut().find(|item| item.id() == id)
    }

    fn notify(&self, event: StoreEvent) {
        if let Some(sender) = &self.notifier {
            let _ = sender.send(Notification {
                entity: self.entity_name,
                event,
            });
        }
    }
}

// =============================================================================
// 5. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn create(&self, params: T::CreateParams) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.send(ResourceRequest::Create { params, respond_to }, response)
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.send(ResourceRequest::Get { id, respond_to }, response)
            .await
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.send(ResourceRequest::List { respond_to }, response)
            .await
    }

    pub async fn update(&self, id: T::Id, patch: T::Patch) -> Result<Option<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.send(
            ResourceRequest::Update {
                id,
                patch,
                respond_to,
            },
            response,
        )
        .await
    }

    pub async fn delete(&self, id: T::Id) -> Result<bool, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.send(ResourceRequest::Delete { id, respond_to }, response)
            .await
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<Option<T::ActionResult>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.send(
            ResourceRequest::Action {
                id,
                action,
                respond_to,
            },
            response,
        )
        .await
    }

    pub async fn replace(&self, items: Vec<T>) -> Result<usize, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.send(ResourceRequest::Replace { items, respond_to }, response)
            .await
    }

    async fn send<R>(
        &self,
        request: ResourceRequest<T>,
        response: oneshot::Receiver<Result<R, FrameworkError>>,
    ) -> Result<R, FrameworkError> {
        self.sender
            .send(request)
            .await
            .map_err(|_| FrameworkError::ChannelClosed)?;
        response.await.map_err(|_| FrameworkError::ResponseDropped)?
    }
}

// =============================================================================
// 6. EXAMPLE USAGE (Test)
// =============================================================================
