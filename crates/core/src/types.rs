/// Identifier assigned to every stored movie (UUID v4, server-generated).
pub type MovieId = uuid::Uuid;
