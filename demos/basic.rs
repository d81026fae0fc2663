//! Basic example of using the Sun Vale puzzle engine

use sunvale_core::{find_solution, Board, Color, Inventory};

fn main() {
    // Set up a small board
    let board = Board::new(vec![Color::Yellow, Color::Black]).expect("board is non-empty");
    let target = Color::Red;
    let inventory = Inventory::new();

    println!("Target: {}", target);
    print!("Slots: ");
    for (i, color) in board.slots().iter().enumerate() {
        if i > 0 {
            print!(", ");
        }
        print!("{}", color);
    }
    println!("\n");

    // Solve it
    println!("Solving...\n");
    let solution = find_solution(target, &board, &inventory);
    if solution.is_empty() {
        println!("No solution found for the current setup.");
    } else {
        for (i, step) in solution.iter().enumerate() {
            println!("{}. {}", i + 1, step);
        }
    }

    // Inspect the color model
    println!("\n--- Colors ---\n");
    for color in Color::ALL {
        println!("{} = {} ({})", color.value(), color, color.hex());
    }
}
