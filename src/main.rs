//! Scratch demo driver walking through each exercise.

use drills::prelude::*;

fn main() {
    let mut x = String::from("SSSSSSSSSSSSSSSSSSSSSSS");
    let mut y = String::from("halo");
    println!("before\n{x}\n{y}");
    swap_values(&mut x, &mut y);
    println!("after\n{x}\n{y}\n");

    let types = ['A', 'B', 'C'];
    for greeting in greetings_for(&types) {
        println!("{greeting}");
    }
    println!();

    let bob = Person { age: 25 };
    println!("age: {}\n", age_of(&bob));

    let mut unsorted = [10, 1, 9, 2, 8, 3, 7, 4, 6, 5];
    let moved_to = bubble_step(&mut unsorted);
    println!("after one step: {unsorted:?} (moved to {moved_to:?})\n");

    let mut foods = vec![""; 9];
    fill_thirds(&mut foods, "pizza", "hamburger", "hot dogs");
    println!("{foods:?}\n");

    let lamb = name_joiner(String::from("Nicho"));
    println!("{}\n", lamb("Smith"));

    let number = 371449635398431;
    let steps = doubled_digit_sum(number);
    println!("your number: {number}");
    println!("{}\n{}\n{}", steps.picked, steps.doubled, steps.sum);
    println!("{}\n", even_position_digits(number));

    let elements = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I'];
    match find_element(&elements, &'D') {
        Some(i) => println!("alphabet: D is at index {i}"),
        None => println!("not found within the array"),
    }
    println!();

    for name in ["Nicho", "", "a name that is far too long"] {
        match validate_name(name) {
            Ok(()) => println!("{name:?}: accepted!"),
            Err(err) => println!("{name:?}: {err}"),
        }
    }
    println!();

    print!("{}", render_grid(&multiplication_grid(10, 10)));
    println!();

    let mut assembler = ChunkAssembler::new();
    for payload in [
        "IMG_START:8:3",
        "IMG_CHUNK:1:bG",
        "IMG_CHUNK:0:aGFs",
        "IMG_CHUNK:2:8",
        "IMG_END",
    ] {
        if let Some(assembled) = assembler.handle(payload) {
            println!("assembled: {}", normalize_base64(&assembled));
        } else {
            println!("received {} / progress {:.0}%", payload, assembler.progress());
        }
    }
}
