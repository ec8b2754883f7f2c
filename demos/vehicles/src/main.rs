mod fleet;

use anyhow::Result;
use clap::Parser;
use inherit::{Count, Db, Entity, Expr, OrderBy, Query, Strategy};
use rust_decimal::Decimal;

/// Lays a vehicle hierarchy out in a store and runs a few canned
/// statements against it.
#[derive(Parser, Debug)]
#[clap(version, about)]
struct Cli {
    /// single-table, joined-table or concrete-table
    #[clap(short, long, default_value_t = Strategy::SingleTable)]
    strategy: Strategy,

    /// Entity store to connect to
    #[clap(short, long, default_value = "memory:")]
    url: String,

    /// Print the derived tables as JSON and exit
    #[clap(long)]
    json_schema: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let db = Db::builder()
        .strategy(cli.strategy)
        .connect(fleet::hierarchy()?, &cli.url)
        .await?;

    if cli.json_schema {
        println!("{}", serde_json::to_string_pretty(&*db.schema().db)?);
        return Ok(());
    }

    println!("==> {} layout", cli.strategy);
    print!("{}", db.schema().db);

    db.reset_db().await?;
    db.push_schema().await?;

    for entity in fleet::seed() {
        db.insert(entity).await?;
    }

    let describe = fleet::describe();
    let print = |title: &str, entities: &[Entity]| {
        println!();
        println!("==> {title}");
        for entity in entities {
            println!(" -> {}", describe.describe(entity));
        }
    };

    let all = db.all(Query::all("Vehicle")).await?;
    print("all vehicles", &all);

    let cars = db.all(Query::all("Car")).await?;
    print("cars", &cars);

    let expensive = db
        .all(
            Query::all("Vehicle")
                .filter(Expr::property("price").gt(40_000))
                .order_by(OrderBy::desc("price")),
        )
        .await?;
    print("vehicles over 40000 EUR", &expensive);

    let fiat = db.insert(fleet::car("Fiat", 14_500, 3, "Petrol")).await?;
    print("inserted", std::slice::from_ref(&fiat));

    let Some(id) = fiat.id() else {
        anyhow::bail!("insert returned no id");
    };
    let fiat = fiat.with("price", Decimal::from(13_900));
    db.update(fiat, ["price"]).await?;
    print("updated price", &[db.get("Car", id).await?]);

    db.delete("Motorcycle", inherit::Id(4)).await?;

    println!();
    println!("==> counts after deleting Motorcycle #4");
    for ty in ["Car", "Motorcycle", "Truck", "Vehicle"] {
        println!(" -> {ty}: {}", db.count(Count::all(ty)).await?);
    }

    Ok(())
}
