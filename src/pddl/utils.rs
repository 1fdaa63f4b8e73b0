/// Joins ground arguments the way they are written inside a proposition: `Spare, Axle`.
pub fn build_arg_string(args: &[String]) -> String {
    let first = args.iter().take(1).fold(String::new(), |acc, item| acc + item);
    args.iter().skip(1).fold(first, |acc, item| acc + ", " + item)
}
