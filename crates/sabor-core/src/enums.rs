//! Roles and status enums for SaborLocal.
//!
//! All enums serialize with the backend's `SCREAMING_SNAKE_CASE` tags.
//! Status enums with state machines provide `allowed_next_states()` so that
//! obviously invalid updates can be rejected before reaching the network.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// Role tag attached to every account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Cliente,
    Productor,
    Admin,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cliente => "CLIENTE",
            Self::Productor => "PRODUCTOR",
            Self::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CLIENTE" => Ok(Self::Cliente),
            "PRODUCTOR" => Ok(Self::Productor),
            "ADMIN" => Ok(Self::Admin),
            other => Err(CoreError::validation(format!("rol desconocido: {other}"))),
        }
    }
}

// ---------------------------------------------------------------------------
// PedidoEstado
// ---------------------------------------------------------------------------

/// Status of an order.
///
/// ```text
/// pendiente → confirmado → en_preparacion → enviado → entregado
///     └───────────┴──────────────┴─────────────┴──→ cancelado
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PedidoEstado {
    Pendiente,
    Confirmado,
    EnPreparacion,
    Enviado,
    Entregado,
    Cancelado,
}

impl PedidoEstado {
    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Pendiente => &[Self::Confirmado, Self::Cancelado],
            Self::Confirmado => &[Self::EnPreparacion, Self::Cancelado],
            Self::EnPreparacion => &[Self::Enviado, Self::Cancelado],
            Self::Enviado => &[Self::Entregado, Self::Cancelado],
            Self::Entregado | Self::Cancelado => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        self.allowed_next_states().is_empty()
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pendiente => "PENDIENTE",
            Self::Confirmado => "CONFIRMADO",
            Self::EnPreparacion => "EN_PREPARACION",
            Self::Enviado => "ENVIADO",
            Self::Entregado => "ENTREGADO",
            Self::Cancelado => "CANCELADO",
        }
    }
}

impl fmt::Display for PedidoEstado {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PedidoEstado {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_tag(s).as_str() {
            "PENDIENTE" => Ok(Self::Pendiente),
            "CONFIRMADO" => Ok(Self::Confirmado),
            "EN_PREPARACION" => Ok(Self::EnPreparacion),
            "ENVIADO" => Ok(Self::Enviado),
            "ENTREGADO" => Ok(Self::Entregado),
            "CANCELADO" => Ok(Self::Cancelado),
            other => Err(CoreError::validation(format!(
                "estado de pedido desconocido: {other}"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// EntregaEstado
// ---------------------------------------------------------------------------

/// Status of a delivery.
///
/// ```text
/// pendiente → en_camino → entregado
///                       → fallido
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntregaEstado {
    Pendiente,
    EnCamino,
    Entregado,
    Fallido,
}

impl EntregaEstado {
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Pendiente => &[Self::EnCamino],
            Self::EnCamino => &[Self::Entregado, Self::Fallido],
            Self::Entregado | Self::Fallido => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pendiente => "PENDIENTE",
            Self::EnCamino => "EN_CAMINO",
            Self::Entregado => "ENTREGADO",
            Self::Fallido => "FALLIDO",
        }
    }
}

impl fmt::Display for EntregaEstado {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntregaEstado {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_tag(s).as_str() {
            "PENDIENTE" => Ok(Self::Pendiente),
            "EN_CAMINO" => Ok(Self::EnCamino),
            "ENTREGADO" => Ok(Self::Entregado),
            "FALLIDO" => Ok(Self::Fallido),
            other => Err(CoreError::validation(format!(
                "estado de entrega desconocido: {other}"
            ))),
        }
    }
}

/// Accept `en-camino`, `en camino` and `EN_CAMINO` alike.
fn normalize_tag(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| if c == '-' || c == ' ' { '_' } else { c })
        .collect::<String>()
        .to_ascii_uppercase()
}
