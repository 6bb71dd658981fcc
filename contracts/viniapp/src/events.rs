use soroban_sdk::{Address, contractevent};


#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ViniappCostUpdated {
    pub old_cost: i128,
    pub new_cost: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ViniappCreated {
    #[topic]
    pub payer: Address,
    pub cost: i128,
}
