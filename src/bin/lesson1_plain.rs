//! Standalone copy of the first lesson, kept free of dependencies.

fn main() {
    let my_variable: i64 = 5;
    let my_other_variable: i64 = 6;

    let mut result = (my_variable + my_other_variable) * 2;

    result += 2;

    println!("Hello world, the value is: {result}");
}
