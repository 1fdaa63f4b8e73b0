//! Small grounded problems used by the command line tool and the tests.

use super::action::Action;
use super::error::Error;
use super::expression::Expression;
use super::problem::Problem;

fn tire(t: &str, loc: &str) -> Expression {
    Expression::fact("Tire", &[t, loc])
}

fn at(loc: &str) -> Expression {
    Expression::fact("At", &[loc])
}

/// Swap the flat tire on the axle for the spare in the trunk.
pub fn spare_tire() -> Result<Problem, Error> {
    let actions = vec![
        Action::new("Remove(Flat, Axle)", &tire("Flat", "Axle"), &expAnd!(expNot!(tire("Flat", "Axle")), tire("Flat", "Ground")))?,
        Action::new("Remove(Spare, Trunk)", &tire("Spare", "Trunk"), &expAnd!(expNot!(tire("Spare", "Trunk")), tire("Spare", "Ground")))?,
        Action::new("PutOn(Spare, Axle)",
            &expAnd!(tire("Spare", "Ground"), expNot!(tire("Flat", "Axle"))),
            &expAnd!(expNot!(tire("Spare", "Ground")), tire("Spare", "Axle")))?,
    ];
    Problem::from_expressions(&expAnd!(tire("Flat", "Axle"), tire("Spare", "Trunk")), &tire("Spare", "Axle"), actions)
}

/// Get from home to the airport, either by car and shuttle or by taxi.
pub fn go_home_to_sfo() -> Result<Problem, Error> {
    let actions = vec![
        Action::new("Drive(Home, SFOLongTermParking)", &at("Home"), &expAnd!(expNot!(at("Home")), at("SFOLongTermParking")))?,
        Action::new("Shuttle(SFOLongTermParking, SFO)", &at("SFOLongTermParking"), &expAnd!(expNot!(at("SFOLongTermParking")), at("SFO")))?,
        Action::new("Taxi(Home, SFO)", &at("Home"), &expAnd!(expNot!(at("Home")), at("SFO")))?,
    ];
    Problem::from_expressions(&at("Home"), &at("SFO"), actions)
}

/// Have the cake and eat it too, with an oven to bake another one.
pub fn have_cake() -> Result<Problem, Error> {
    let have = Expression::fact("Have", &["Cake"]);
    let eaten = Expression::fact("Eaten", &["Cake"]);
    let actions = vec![
        Action::new("Eat(Cake)", &have, &expAnd!(expNot!(have), eaten))?,
        Action::new("Bake(Cake)", &expNot!(have), &have)?,
    ];
    Problem::from_expressions(&have, &expAnd!(have, eaten), actions)
}

/// Two planes swap two pieces of cargo between SFO and JFK. Every load, unload and flight
/// is grounded up front, 20 actions in total.
///
/// The goals are non-mutex from level 2 on, where the second action level is already 30 wide,
/// so extraction has to fall back to enumerating that level before the graph grows to level 3.
pub fn air_cargo() -> Result<Problem, Error> {
    let cargo = ["C1", "C2"];
    let planes = ["P1", "P2"];
    let airports = ["SFO", "JFK"];
    let at = |x: &str, a: &str| Expression::fact("At", &[x, a]);
    let inside = |c: &str, p: &str| Expression::fact("In", &[c, p]);
    let typed = |c: &str, p: &str, a: &str| expAnd!(
        Expression::fact("Cargo", &[c]), Expression::fact("Plane", &[p]), Expression::fact("Airport", &[a]));

    let mut actions = Vec::new();
    for c in cargo {
        for p in planes {
            for a in airports {
                actions.push(Action::new(&format!("Load({}, {}, {})", c, p, a),
                    &expAnd!(at(c, a), at(p, a), typed(c, p, a)),
                    &expAnd!(expNot!(at(c, a)), inside(c, p)))?);
            }
        }
    }
    for c in cargo {
        for p in planes {
            for a in airports {
                actions.push(Action::new(&format!("Unload({}, {}, {})", c, p, a),
                    &expAnd!(inside(c, p), at(p, a), typed(c, p, a)),
                    &expAnd!(at(c, a), expNot!(inside(c, p))))?);
            }
        }
    }
    for p in planes {
        for from in airports {
            for to in airports.iter().copied().filter(|&to| to != from) {
                actions.push(Action::new(&format!("Fly({}, {}, {})", p, from, to),
                    &expAnd!(at(p, from), Expression::fact("Plane", &[p]),
                        Expression::fact("Airport", &[from]), Expression::fact("Airport", &[to])),
                    &expAnd!(expNot!(at(p, from)), at(p, to)))?);
            }
        }
    }

    let initial = expAnd!(at("C1", "SFO"), at("C2", "JFK"), at("P1", "SFO"), at("P2", "JFK"),
        Expression::fact("Cargo", &["C1"]), Expression::fact("Cargo", &["C2"]),
        Expression::fact("Plane", &["P1"]), Expression::fact("Plane", &["P2"]),
        Expression::fact("Airport", &["JFK"]), Expression::fact("Airport", &["SFO"]));
    Problem::from_expressions(&initial, &expAnd!(at("C1", "JFK"), at("C2", "SFO")), actions)
}

/// Walking around the block never gets anyone to the moon.
pub fn stuck() -> Result<Problem, Error> {
    let actions = vec![
        Action::new("Walk(Home, Park)", &at("Home"), &expAnd!(expNot!(at("Home")), at("Park")))?,
        Action::new("Walk(Park, Home)", &at("Park"), &expAnd!(expNot!(at("Park")), at("Home")))?,
    ];
    Problem::from_expressions(&at("Home"), &at("Moon"), actions)
}
