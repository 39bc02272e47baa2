//! # Workflows - Portable Business Logic
//!
//! Multi-step operations shared by every frontend. Workflows take
//! `&Arc<RwLock<AppCore>>`, read snapshots from the store, issue bridge
//! calls, apply optimistic store updates, and return domain results as
//! `Result<T, TallyError>`. Frontends own only the rendering.

pub mod notifications;
