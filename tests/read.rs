extern crate sensible_read;

use std::io::{Read, Write};

use sensible_read::{
    read_from, read_opt_from, read_opt_prompted, read_prompted, reader_from, readline_from,
    readline_from_delimited, readline_prompted, Extract, InputSource, ScanError,
};

#[derive(Debug, Default, PartialEq)]
struct Tester {
    x: i32,
    f: f32,
}

impl Extract for Tester {
    fn extract<R: Read, W: Write>(source: &mut InputSource<R, W>) -> Result<Option<Self>, ScanError> {
        let x = match i32::extract(source)? {
            Some(x) => x,
            None => return Ok(None),
        };

        let f = match f32::extract(source)? {
            Some(f) => f,
            None => return Ok(None),
        };

        Ok(Some(Tester {
            x,
            f,
        }))
    }
}

#[test]
fn retry_until_valid() {
    let mut source = InputSource::new("abc abc 42 next".as_bytes());

    assert_eq!(42, read_from::<i32>(&mut source).unwrap());
    assert_eq!(false, source.is_failed());
    assert_eq!(Some("next".into()), source.next_token().unwrap());
    assert_eq!(None, source.next_token().unwrap());
}

#[test]
fn retry_drops_one_token_per_attempt() {
    let mut source = InputSource::interactive("a b c 9".as_bytes(), Vec::new());

    assert_eq!(9, read_prompted::<i32>(&mut source, "? ").unwrap());
    assert_eq!(b"? ? ? ? ", source.sink().unwrap().as_slice());
}

#[test]
fn eof_sentinel() {
    let mut source = InputSource::new("".as_bytes());

    assert_eq!(0, read_from::<i32>(&mut source).unwrap());
    assert_eq!(true, source.is_eof());
    assert_eq!(false, source.is_failed());
    assert_eq!(0, read_from::<i32>(&mut source).unwrap());
    assert_eq!(String::new(), read_from::<String>(&mut source).unwrap());
    assert_eq!(0.0, read_from::<f64>(&mut source).unwrap());

    let mut source = InputSource::new(" \n\t \n".as_bytes());

    assert_eq!(0, read_from::<u64>(&mut source).unwrap());
    assert_eq!(true, source.is_eof());
}

#[test]
fn eof_after_malformed_tokens() {
    let mut source = InputSource::new("x y\nz\n".as_bytes());

    assert_eq!(0, read_from::<u16>(&mut source).unwrap());
    assert_eq!(true, source.is_eof());
    assert_eq!(false, source.is_failed());
}

#[test]
fn sentinel_and_none_stay_distinct() {
    let mut source = InputSource::new("0".as_bytes());

    assert_eq!(Some(0), read_opt_from::<i32>(&mut source).unwrap());
    assert_eq!(None, read_opt_from::<i32>(&mut source).unwrap());
    assert_eq!(0, read_from::<i32>(&mut source).unwrap());
}

#[test]
fn optional_success() {
    let mut source = InputSource::new("7".as_bytes());

    assert_eq!(Some(7), read_opt_from::<i32>(&mut source).unwrap());
    assert_eq!(false, source.is_failed());
}

#[test]
fn optional_failure_leaves_token() {
    let mut source = InputSource::new("abc\n".as_bytes());

    assert_eq!(None, read_opt_from::<i32>(&mut source).unwrap());
    assert_eq!(false, source.is_failed());
    assert_eq!(false, source.is_eof());
    assert_eq!("abc", readline_from(&mut source).unwrap());
}

#[test]
fn optional_prompts_once() {
    let mut source = InputSource::interactive("tall 180".as_bytes(), Vec::new());

    assert_eq!(None, read_opt_prompted::<u32>(&mut source, "height: ").unwrap());
    assert_eq!(b"height: ", source.sink().unwrap().as_slice());
    assert_eq!(Some("tall".into()), read_opt_prompted::<String>(&mut source, "").unwrap());
    assert_eq!(Some(180), read_opt_prompted::<u32>(&mut source, "height: ").unwrap());
    assert_eq!(b"height: height: ", source.sink().unwrap().as_slice());
}

#[test]
fn optional_counts_invalid_tokens() {
    let mut source = InputSource::new("1 two 3\nfour 5 6.5".as_bytes());

    let mut valid = Vec::new();
    let mut invalid = Vec::new();

    loop {
        match read_opt_from::<i32>(&mut source).unwrap() {
            Some(n) => valid.push(n),
            None if source.is_eof() => break,
            None => invalid.push(read_from::<String>(&mut source).unwrap()),
        }
    }

    assert_eq!(vec![1, 3, 5], valid);
    assert_eq!(vec!["two", "four", "6.5"], invalid);
}

#[test]
fn readline_after_formatted_read() {
    let mut source = InputSource::new("42\nhello\n".as_bytes());

    assert_eq!(42, read_from::<i32>(&mut source).unwrap());
    assert_eq!("hello", readline_from(&mut source).unwrap());
    assert_eq!("", readline_from(&mut source).unwrap());
}

#[test]
fn readline_crlf() {
    let mut source = InputSource::new("1\r\nfirst line\r\n\r\n  second line \r\n".as_bytes());

    assert_eq!(1, read_from::<u8>(&mut source).unwrap());
    assert_eq!("first line", readline_from(&mut source).unwrap());
    assert_eq!("second line ", readline_from(&mut source).unwrap());
    assert_eq!("", readline_from(&mut source).unwrap());
}

#[test]
fn readline_without_delimiter() {
    let mut source = InputSource::new("shuf.txt".as_bytes());

    assert_eq!("shuf.txt", readline_from(&mut source).unwrap());
    assert_eq!(true, source.is_eof());
    assert_eq!("", readline_from(&mut source).unwrap());
}

#[test]
fn readline_custom_delimiter() {
    let mut source = InputSource::new("a b|c d|中文。寝る".as_bytes());

    assert_eq!("a b", readline_from_delimited(&mut source, '|').unwrap());
    assert_eq!("c d", readline_from_delimited(&mut source, '|').unwrap());
    assert_eq!("中文", readline_from_delimited(&mut source, '。').unwrap());
    assert_eq!("寝る", readline_from_delimited(&mut source, '。').unwrap());
}

#[test]
fn readline_prompts() {
    let mut source = InputSource::interactive("  notes.txt\n".as_bytes(), Vec::new());

    assert_eq!("notes.txt", readline_prompted(&mut source, "File: ", '\n').unwrap());
    assert_eq!(b"File: ", source.sink().unwrap().as_slice());
}

#[test]
fn prompts_ignored_without_sink() {
    let mut source = InputSource::new("5".as_bytes());

    assert_eq!(false, source.is_interactive());
    assert_eq!(5, read_prompted::<i32>(&mut source, "ignored: ").unwrap());
    assert!(source.sink().is_none());
}

#[test]
fn custom_type() {
    let mut source = InputSource::new("3 2.5".as_bytes());

    assert_eq!(
        Tester {
            x: 3,
            f: 2.5
        },
        read_from::<Tester>(&mut source).unwrap()
    );
}

#[test]
fn custom_type_retries_on_bad_field() {
    let mut source = InputSource::new("3 oops 4 1.5".as_bytes());

    assert_eq!(
        Tester {
            x: 4,
            f: 1.5
        },
        read_from::<Tester>(&mut source).unwrap()
    );

    let mut source = InputSource::new("3".as_bytes());

    assert_eq!(Tester::default(), read_from::<Tester>(&mut source).unwrap());
}

#[test]
fn deferred_reader() {
    let mut source = InputSource::interactive("green 4 2.25 3 1.5".as_bytes(), Vec::new());

    let apples: u32 = reader_from(&mut source).get().unwrap();
    let price: f64 = reader_from(&mut source).get().unwrap();
    let t: Tester = reader_from(&mut source).get().unwrap();

    assert_eq!(4, apples);
    assert_eq!(2.25, price);
    assert_eq!(
        Tester {
            x: 3,
            f: 1.5
        },
        t
    );
    assert!(source.sink().unwrap().is_empty());

    let apples: u32 = reader_from(&mut source).get().unwrap();

    assert_eq!(0, apples);
}

#[test]
fn deferred_reader_with_prompt() {
    let mut source = InputSource::interactive("x 8".as_bytes(), Vec::new());

    let reader = sensible_read::Reader::new(&mut source, "n: ");

    assert_eq!("n: ", reader.prompt());

    let n: i64 = reader.get().unwrap();

    assert_eq!(8, n);
    assert_eq!(b"n: n: ", source.sink().unwrap().as_slice());
}

#[test]
fn io_errors_propagate() {
    struct Broken;

    impl Read for Broken {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "broken"))
        }
    }

    let mut source = InputSource::new(Broken);

    let err = read_from::<i32>(&mut source).unwrap_err();

    assert!(matches!(err, ScanError::IOError(_)));
    assert_eq!(false, source.is_failed());
    assert!(read_opt_from::<i32>(&mut source).is_err());
    assert_eq!(false, source.is_failed());
}
