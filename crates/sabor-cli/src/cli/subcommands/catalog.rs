use clap::{Args, Subcommand};

#[derive(Clone, Debug, Args)]
pub struct EntityIdArgs {
    pub id: String,
}

/// Product commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProductoCommands {
    /// List products, optionally for one producer.
    List(ProductoListArgs),
    /// Show one product.
    Get(EntityIdArgs),
    /// Publish a product (productor accounts).
    Create(ProductoCreateArgs),
    /// Remove a product.
    Delete(EntityIdArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ProductoListArgs {
    /// Only products of this producer.
    #[arg(long)]
    pub productor: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ProductoCreateArgs {
    #[arg(long)]
    pub nombre: String,
    #[arg(long)]
    pub precio: f64,
    #[arg(long, default_value_t = 0)]
    pub stock: u32,
    #[arg(long)]
    pub descripcion: Option<String>,
    #[arg(long)]
    pub categoria: Option<String>,
    /// Sale unit, e.g. kg or docena.
    #[arg(long)]
    pub unidad: Option<String>,
}

/// Producer commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProductorCommands {
    List,
    Get(EntityIdArgs),
}

/// Customer commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ClienteCommands {
    List,
    Get(EntityIdArgs),
}
