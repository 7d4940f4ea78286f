use raw_containers::*;

fn main() {
    let _ = simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Trace)
        .init();

    let mut vec = vector!["1".to_owned(), "2".to_owned()];
    vec.insert(1, "42".to_owned());
    vec.erase(0);
    vec.resize(4);

    println!("{vec:?} (capacity {})", vec.capacity());
}
