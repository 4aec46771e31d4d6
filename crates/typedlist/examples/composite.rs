use typedlist::{AcceptedType, Composite, Result, TypedList, Value};

#[derive(Debug, PartialEq, Composite)]
#[composite(extends(Animal))]
struct Dog {
    name: String,
}

#[derive(Debug, PartialEq, Composite)]
#[composite(extends(Animal))]
struct Cat {
    lives: u8,
}

#[derive(Debug, PartialEq, Composite)]
struct Rock;

fn main() -> Result<()> {
    let mut animals = TypedList::new(AcceptedType::named("Animal"));

    animals.insert(Value::object(Dog {
        name: "Rex".to_string(),
    }))?;
    animals.insert(Value::object(Cat { lives: 9 }))?;

    if let Err(e) = animals.insert(Value::object(Rock)) {
        println!("{e}");
    }

    for (index, animal) in animals.cursor() {
        println!("{index}: {animal:?}");
    }

    Ok(())
}
