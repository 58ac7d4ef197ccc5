use dotenvy::dotenv;

const REQUIRED: [&str; 3] = ["PUSHER_KEY", "PUSHER_CLUSTER", "COMMODITIES_URL"];

fn main() {
  // Tell Cargo that if the env file changes, to rerun this build script.
  println!("cargo::rerun-if-changed=.env");

  // a missing .env is fine as long as the vars come from the shell
  let _ = dotenv();

  for var in REQUIRED {
    println!("cargo::rerun-if-env-changed={}", var);
    match std::env::var(var) {
      Ok(value) => println!("cargo::rustc-env={}={}", var, value),
      Err(_) => panic!("{} must be set at compile time!", var),
    }
  }
}
