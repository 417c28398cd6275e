#[derive(Debug, FromPrimitive, ToPrimitive, FromStr, Copy, Clone, PartialEq, Eq, Hash)]
#[enum_from_str(use_primitives)]
pub enum UnitTypeId {
	NotAUnit = 0,
	CommandCenter = 18,
	SupplyDepot = 19,
	Refinery = 20,
	SCV = 45,
	Nexus = 59,
	Pylon = 60,
	Assimilator = 61,
	Probe = 84,
	Hatchery = 86,
	Extractor = 88,
	SpawningPool = 89,
	Lair = 100,
	Hive = 101,
	Drone = 104,
	Overlord = 106,
	Queen = 126,
	Larva = 151,
	MineralField = 341,
	MineralField750 = 483,
	RefineryRich = 1943,
	AssimilatorRich = 1980,
	ExtractorRich = 1995,
}
