use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Exchange the relay handlers publish to
    #[arg(long, default_value = "amq.direct")]
    pub exchange: String,

    /// Routing key for published messages (empty = queue default binding)
    #[arg(long, default_value = "")]
    pub routing_key: String,

    /// Number of demo orders to create at startup
    #[arg(long, default_value_t = 3)]
    pub seed_orders: u64,
}
