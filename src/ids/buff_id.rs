#[derive(Debug, FromPrimitive, ToPrimitive, FromStr, Copy, Clone, PartialEq, Eq, Hash)]
#[enum_from_str(use_primitives)]
pub enum BuffId {
	Null = 0,
	QueenSpawnLarvaTimer = 11,
	CarryMineralFieldMinerals = 271,
	CarryHighYieldMineralFieldMinerals = 272,
	CarryHarvestableVespeneGeyserGas = 273,
	CarryHarvestableVespeneGeyserGasProtoss = 274,
	CarryHarvestableVespeneGeyserGasZerg = 275,
}
