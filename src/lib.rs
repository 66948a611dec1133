/*!
# Sensible Read

Read typed values from the standard input or any other byte stream. A token which cannot be parsed as the requested type is dropped and the read is attempted again, the end of input yields the type's default value, and a source is never left in a failed state.

## Examples

Reading from the standard input, with a prompt printed before every attempt:

```rust,no_run
extern crate sensible_read;

use sensible_read::{read, read_opt, reader, readline};

let green: u32 = reader("Please enter how many green and red apples you want to buy: ").get().unwrap();
let red = read::<u32>("").unwrap();
let price = read::<f64>("Please enter the price per apple: ").unwrap();

println!("Your total bill is {}", (green + red) as f64 * price);

let name = readline("What is your name? ").unwrap();

match read_opt::<u32>("Please enter your age:\n").unwrap() {
    Some(age) => println!("{} is {} years old.", name, age),
    None => println!("You failed to enter a valid age."),
}
```

Reading from any `Read`, without prompts:

```rust
extern crate sensible_read;

use sensible_read::{read_from, read_opt_from, readline_from, InputSource};

let mut source = InputSource::new("abc 42\nhello world\nxyz".as_bytes());

assert_eq!(42, read_from::<i32>(&mut source).unwrap());
assert_eq!("hello world", readline_from(&mut source).unwrap());
assert_eq!(None, read_opt_from::<i32>(&mut source).unwrap());
assert_eq!(Some("xyz".into()), source.next_token().unwrap());
assert_eq!(0, read_from::<i32>(&mut source).unwrap());
assert_eq!(None, read_opt_from::<i32>(&mut source).unwrap());
```
*/

mod extract;
mod input_source;
mod read;
mod reader;
mod scan_error;
mod stdio;
mod whitespaces;

pub use extract::*;
pub use input_source::*;
pub use read::*;
pub use reader::*;
pub use scan_error::*;
pub use stdio::*;

/// The number of bytes requested from the underlying reader at a time.
pub const BUFFER_SIZE: usize = 256;
