//! Entity structs for the SaborLocal marketplace.
//!
//! These are the domain forms: ids are plain strings, relations use
//! [`Related`](crate::Related), and wire quirks (`_id`, camelCase) are handled
//! by the DTO layer in `sabor-client`.

mod cliente;
mod entrega;
mod pedido;
mod producto;
mod productor;

pub use cliente::Cliente;
pub use entrega::Entrega;
pub use pedido::{Pedido, PedidoItem};
pub use producto::Producto;
pub use productor::Productor;
